//! Cross-file import and re-export resolution.
//!
//! Invoked on first demand when the scope walk reaches a module scope and
//! lands on an import binding. Follows export tables hop by hop until the
//! originating definition, with an explicit visited set so re-export cycles
//! terminate as unresolved instead of looping. The hop cap only bounds
//! pathological acyclic chains; cycles are caught by the set.

use crate::error::ResolveError;
use crate::project::ProjectIndex;
use smol_str::SmolStr;
use std::collections::HashSet;
use symscope_api::{Definition, DefinitionKind, Export, FileId, ImportedName, SymbolId};

pub const MAX_REEXPORT_HOPS: usize = 32;

pub struct ImportResolver<'a> {
    project: &'a ProjectIndex,
}

impl<'a> ImportResolver<'a> {
    pub fn new(project: &'a ProjectIndex) -> Self {
        Self { project }
    }

    /// Resolve an import binding to its origin definition.
    ///
    /// Named and default imports follow the export chain to the original
    /// symbol. A namespace import has no single origin; it resolves to the
    /// binding itself and member lookups defer to the source module's export
    /// table (see [`member_of_module`](Self::member_of_module)).
    pub fn resolve(&self, import: &Definition) -> Option<SymbolId> {
        let DefinitionKind::Import { source, imported } = &import.kind else {
            return None;
        };
        match imported {
            ImportedName::Named(original) => self.follow(source, original),
            ImportedName::Default => self.follow(source, "default"),
            ImportedName::Namespace => Some(import.symbol),
        }
    }

    /// Resolve `ns.member` for a namespace import of `source`.
    pub fn member_of_module(&self, source: &str, member: &str) -> Option<SymbolId> {
        self.follow(source, member)
    }

    /// Follow the export chain for `name` starting at module `source`.
    pub fn follow(&self, source: &str, name: &str) -> Option<SymbolId> {
        let mut visited = HashSet::new();
        self.follow_inner(source, name, &mut visited, 0)
    }

    fn follow_inner(
        &self,
        source: &str,
        name: &str,
        visited: &mut HashSet<(FileId, SmolStr)>,
        hops: usize,
    ) -> Option<SymbolId> {
        if hops > MAX_REEXPORT_HOPS {
            tracing::debug!(module = source, name, "re-export chain exceeded hop cap");
            return None;
        }
        // Modules outside the project (external packages) are unresolved.
        let file = self.project.file_by_path(source)?;
        if !visited.insert((file.file, SmolStr::new(name))) {
            let error = ResolveError::ImportCycle {
                module: source.to_string(),
                name: name.to_string(),
            };
            tracing::debug!(%error, "terminating import resolution");
            return None;
        }

        match file.exports.get(name) {
            Some(Export::Local { symbol }) => Some(*symbol),
            Some(Export::Reexport { source, original }) => {
                self.follow_inner(source, original, visited, hops + 1)
            }
            None => file
                .exports
                .star_sources
                .iter()
                .find_map(|star| self.follow_inner(star, name, visited, hops + 1)),
        }
    }
}
