//! Scope-aware name resolution.
//!
//! Two-phase contract: the project index eagerly records every binding per
//! scope (cheap, total); actual resolution happens lazily through
//! [`Resolver`] handles and is memoized in the shared [`ResolutionCache`].
//! Only names that are actually referenced ever pay the walk.

pub mod cache;
pub mod imports;
pub mod visibility;

pub use cache::{CacheStats, ResolutionCache};
pub use imports::ImportResolver;
pub use visibility::is_visible;

use crate::project::ProjectIndex;
use smol_str::SmolStr;
use symscope_api::{DefinitionKind, ScopeId, SymbolId};

pub struct ResolverIndex<'a> {
    project: &'a ProjectIndex,
    cache: &'a ResolutionCache,
    imports: ImportResolver<'a>,
}

/// A lazy resolver for one `(scope, name)` pair. Cheap to build, resolves on
/// first demand through the shared cache.
pub struct Resolver<'a, 'b> {
    index: &'b ResolverIndex<'a>,
    scope: ScopeId,
    name: SmolStr,
}

impl Resolver<'_, '_> {
    pub fn resolve(&self) -> Option<SymbolId> {
        self.index.resolve(self.scope, &self.name)
    }
}

impl<'a> ResolverIndex<'a> {
    pub fn new(project: &'a ProjectIndex, cache: &'a ResolutionCache) -> Self {
        Self {
            project,
            cache,
            imports: ImportResolver::new(project),
        }
    }

    pub fn resolver(&self, scope: ScopeId, name: &str) -> Resolver<'a, '_> {
        Resolver {
            index: self,
            scope,
            name: SmolStr::new(name),
        }
    }

    pub fn imports(&self) -> &ImportResolver<'a> {
        &self.imports
    }

    /// Resolve `name` as seen from `scope`, memoized.
    pub fn resolve(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        self.cache
            .get_or_resolve(scope, name, || self.walk(scope, name))
    }

    /// The scope walk. Innermost eligible definition wins, regardless of how
    /// wide a farther definition's visibility is. Import bindings are checked
    /// at each level only after that level's own definitions miss, so a local
    /// always shadows an import of the same name; Python-style function-local
    /// imports resolve at the scope that declares them.
    fn walk(&self, origin: ScopeId, name: &str) -> Option<SymbolId> {
        let mut current = Some(origin);
        while let Some(scope_id) = current {
            if let Some(symbol) = self.lookup_local(scope_id, origin, name) {
                return Some(symbol);
            }
            if let Some(symbol) = self.lookup_import(scope_id, origin, name) {
                return Some(symbol);
            }
            current = self.project.scope(scope_id)?.parent;
        }
        None
    }

    /// Non-import definitions declared directly in `declared`, filtered by
    /// visibility from the walk's origin.
    fn lookup_local(&self, declared: ScopeId, origin: ScopeId, name: &str) -> Option<SymbolId> {
        for &symbol in self.project.declared_in(declared, name) {
            let def = self.project.definition(symbol)?;
            if matches!(def.kind, DefinitionKind::Import { .. }) {
                continue;
            }
            if is_visible(self.project, def, origin) {
                return Some(symbol);
            }
        }
        None
    }

    /// Import bindings declared at `declared`. Local definitions of the same
    /// name were already checked, so an import never shadows a local.
    fn lookup_import(&self, declared: ScopeId, origin: ScopeId, name: &str) -> Option<SymbolId> {
        for &symbol in self.project.declared_in(declared, name) {
            let def = self.project.definition(symbol)?;
            if !matches!(def.kind, DefinitionKind::Import { .. }) {
                continue;
            }
            if is_visible(self.project, def, origin) {
                if let Some(target) = self.imports.resolve(def) {
                    return Some(target);
                }
            }
        }
        None
    }
}
