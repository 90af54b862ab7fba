//! Whole-project view over the per-file semantic indices.
//!
//! Validates each file against the input contract and builds the lookup
//! tables every later phase runs on: scope trees, per-scope binding tables
//! (the eager half of the resolver index), definition and export access.
//! A file that violates the contract is rejected and excluded from the run;
//! the other files continue.

use crate::error::ResolveError;
use rayon::prelude::*;
use smol_str::SmolStr;
use std::collections::HashMap;
use symscope_api::{
    Definition, FileId, Language, LexicalScope, ScopeId, ScopeKind, SemanticIndex, SymbolId,
};

/// A file excluded from the run because its index broke the input contract.
#[derive(Debug, Clone)]
pub struct RejectedFile {
    pub file: FileId,
    pub path: SmolStr,
    pub error: ResolveError,
}

pub struct ProjectIndex {
    files: Vec<SemanticIndex>,
    by_path: HashMap<SmolStr, usize>,
    by_file: HashMap<FileId, usize>,
    scopes: HashMap<ScopeId, LexicalScope>,
    scope_file: HashMap<ScopeId, FileId>,
    /// (declaring scope, name) -> definitions declared there, in input order.
    bindings: HashMap<ScopeId, HashMap<SmolStr, Vec<SymbolId>>>,
    definitions: HashMap<SymbolId, Definition>,
    roots: HashMap<FileId, ScopeId>,
}

impl ProjectIndex {
    /// Validate and index the input files. Order of `indices` is preserved
    /// and determines output order downstream.
    pub fn build(indices: Vec<SemanticIndex>) -> (Self, Vec<RejectedFile>) {
        // Per-file validation is independent; run it across files.
        let verdicts: Vec<Option<ResolveError>> =
            indices.par_iter().map(validate_file).collect();

        let mut project = Self {
            files: Vec::with_capacity(indices.len()),
            by_path: HashMap::new(),
            by_file: HashMap::new(),
            scopes: HashMap::new(),
            scope_file: HashMap::new(),
            bindings: HashMap::new(),
            definitions: HashMap::new(),
            roots: HashMap::new(),
        };
        let mut rejected = Vec::new();

        for (index, verdict) in indices.into_iter().zip(verdicts) {
            let error = verdict.or_else(|| project.cross_file_conflict(&index));
            if let Some(error) = error {
                tracing::error!(path = %index.path, %error, "rejecting semantic index");
                rejected.push(RejectedFile {
                    file: index.file,
                    path: index.path.clone(),
                    error,
                });
                continue;
            }
            project.admit(index);
        }

        tracing::debug!(
            files = project.files.len(),
            scopes = project.scopes.len(),
            definitions = project.definitions.len(),
            rejected = rejected.len(),
            "project index built"
        );
        (project, rejected)
    }

    /// Scope/symbol ids must not collide across accepted files.
    fn cross_file_conflict(&self, index: &SemanticIndex) -> Option<ResolveError> {
        if self.by_path.contains_key(&index.path) {
            return Some(ResolveError::MalformedIndex(format!(
                "duplicate file path '{}'",
                index.path
            )));
        }
        if self.by_file.contains_key(&index.file) {
            return Some(ResolveError::MalformedIndex(format!(
                "duplicate file id {:?}",
                index.file
            )));
        }
        for scope in &index.scopes {
            if self.scopes.contains_key(&scope.id) {
                return Some(ResolveError::MalformedIndex(format!(
                    "scope id {:?} already used by another file",
                    scope.id
                )));
            }
        }
        for def in &index.definitions {
            if self.definitions.contains_key(&def.symbol) {
                return Some(ResolveError::MalformedIndex(format!(
                    "symbol id {:?} already used by another file",
                    def.symbol
                )));
            }
        }
        None
    }

    fn admit(&mut self, index: SemanticIndex) {
        let slot = self.files.len();
        self.by_path.insert(index.path.clone(), slot);
        self.by_file.insert(index.file, slot);

        for scope in &index.scopes {
            self.scopes.insert(scope.id, scope.clone());
            self.scope_file.insert(scope.id, index.file);
            if scope.parent.is_none() {
                self.roots.insert(index.file, scope.id);
            }
        }
        for def in &index.definitions {
            self.bindings
                .entry(def.defining_scope)
                .or_default()
                .entry(def.name.clone())
                .or_default()
                .push(def.symbol);
            self.definitions.insert(def.symbol, def.clone());
        }
        self.files.push(index);
    }

    pub fn files(&self) -> &[SemanticIndex] {
        &self.files
    }

    pub fn file_by_path(&self, path: &str) -> Option<&SemanticIndex> {
        self.by_path.get(path).map(|&i| &self.files[i])
    }

    pub fn file(&self, id: FileId) -> Option<&SemanticIndex> {
        self.by_file.get(&id).map(|&i| &self.files[i])
    }

    pub fn scope(&self, id: ScopeId) -> Option<&LexicalScope> {
        self.scopes.get(&id)
    }

    pub fn definition(&self, symbol: SymbolId) -> Option<&Definition> {
        self.definitions.get(&symbol)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.files.iter().flat_map(|f| f.definitions.iter())
    }

    pub fn file_of_scope(&self, scope: ScopeId) -> Option<FileId> {
        self.scope_file.get(&scope).copied()
    }

    pub fn language_of_scope(&self, scope: ScopeId) -> Option<Language> {
        self.file(self.file_of_scope(scope)?).map(|f| f.language)
    }

    pub fn root_scope(&self, file: FileId) -> Option<ScopeId> {
        self.roots.get(&file).copied()
    }

    /// Definitions declared directly in `scope` under `name`, input order.
    pub fn declared_in(&self, scope: ScopeId, name: &str) -> &[SymbolId] {
        self.bindings
            .get(&scope)
            .and_then(|names| names.get(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `scope` is `ancestor` or nested anywhere inside it.
    pub fn is_within(&self, scope: ScopeId, ancestor: ScopeId) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.scope(id).and_then(|s| s.parent);
        }
        false
    }
}

fn validate_file(index: &SemanticIndex) -> Option<ResolveError> {
    let mut seen: HashMap<ScopeId, &LexicalScope> = HashMap::with_capacity(index.scopes.len());
    let mut root = None;
    for scope in &index.scopes {
        if seen.insert(scope.id, scope).is_some() {
            return Some(ResolveError::MalformedIndex(format!(
                "duplicate scope id {:?}",
                scope.id
            )));
        }
        if scope.parent.is_none() {
            if scope.kind != ScopeKind::Module {
                return Some(ResolveError::MalformedIndex(format!(
                    "root scope {:?} is not a module scope",
                    scope.id
                )));
            }
            if root.replace(scope.id).is_some() {
                return Some(ResolveError::MalformedIndex(
                    "more than one root scope".to_string(),
                ));
            }
        }
    }
    if root.is_none() && !index.scopes.is_empty() {
        return Some(ResolveError::MalformedIndex("no root scope".to_string()));
    }

    // Parents must exist in-file and parent chains must reach the root
    // (catches both dangling parents and cycles).
    for scope in &index.scopes {
        let mut current = scope;
        for _ in 0..=index.scopes.len() {
            match current.parent {
                None => break,
                Some(parent) => match seen.get(&parent) {
                    Some(p) => current = p,
                    None => {
                        return Some(ResolveError::MalformedIndex(format!(
                            "scope {:?} has unknown parent {:?}",
                            scope.id, parent
                        )));
                    }
                },
            }
        }
        if current.parent.is_some() {
            return Some(ResolveError::MalformedIndex(format!(
                "scope {:?} sits on a parent cycle",
                scope.id
            )));
        }
    }

    for def in &index.definitions {
        if !seen.contains_key(&def.defining_scope) {
            return Some(ResolveError::MissingScope {
                symbol: def.symbol,
                scope: def.defining_scope,
            });
        }
    }
    for reference in &index.references {
        if !seen.contains_key(&reference.scope) {
            return Some(ResolveError::MalformedIndex(format!(
                "reference '{}' names unknown scope {:?}",
                reference.name, reference.scope
            )));
        }
    }
    None
}
