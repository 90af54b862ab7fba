use super::symbol::{Range, ScopeId, SymbolId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Module,
    Function,
    Block,
    Class,
    Interface,
    Enum,
    Impl,
}

impl ScopeKind {
    /// Scopes that introduce a type body, i.e. where `this`/`self` acquire
    /// a meaning.
    pub fn is_type_body(&self) -> bool {
        matches!(
            self,
            ScopeKind::Class | ScopeKind::Interface | ScopeKind::Enum | ScopeKind::Impl
        )
    }
}

/// One node of a file's lexical scope tree. Scope trees form a forest with
/// exactly one `Module` root per file; every other scope has one in-file
/// parent. Immutable once built by the indexer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct LexicalScope {
    pub id: ScopeId,
    pub parent: Option<ScopeId>,
    pub kind: ScopeKind,
    /// The symbol whose body this scope is (the class for a class-body scope,
    /// the function for a function-body scope). `None` for module and block
    /// scopes. Required for self-reference keyword resolution.
    pub owner: Option<SymbolId>,
    pub range: Range,
}

/// How far from its defining scope a definition can be named.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Only from the defining scope itself.
    ScopeLocal,
    /// From the defining scope and any scope nested inside it.
    ScopeChildren,
    /// From anywhere in the same file.
    File,
    /// From any file, once an import brings the name into scope.
    Exported,
}
