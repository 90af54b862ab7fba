use super::scope::Visibility;
use super::symbol::{Location, ScopeId, SymbolId};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A module specifier as normalized by the front-end: a project-relative
/// path equal to the target file's `SemanticIndex::path`.
pub type ModulePath = SmolStr;

/// What an import declaration binds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImportedName {
    /// `import { original } from "m"` / `from m import original` — the name
    /// as exported by the source module (the local binding may be aliased).
    Named(SmolStr),
    /// `import x from "m"` — the module's default export.
    Default,
    /// `import * as ns from "m"` / `import m` — the whole export table.
    Namespace,
}

/// Closed union over everything the indexers emit as a definition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DefinitionKind {
    Function {
        return_type: Option<SmolStr>,
    },
    Class {
        extends: Option<SmolStr>,
        implements: Vec<SmolStr>,
    },
    Interface {
        extends: Vec<SmolStr>,
    },
    Enum,
    Variable {
        type_annotation: Option<SmolStr>,
    },
    Parameter {
        type_annotation: Option<SmolStr>,
    },
    Method {
        return_type: Option<SmolStr>,
    },
    Constructor,
    TypeAlias {
        target: Option<SmolStr>,
    },
    Import {
        source: ModulePath,
        imported: ImportedName,
    },
}

impl DefinitionKind {
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            DefinitionKind::Class { .. }
                | DefinitionKind::Interface { .. }
                | DefinitionKind::Enum
                | DefinitionKind::TypeAlias { .. }
        )
    }

    pub fn is_callable(&self) -> bool {
        matches!(
            self,
            DefinitionKind::Function { .. }
                | DefinitionKind::Method { .. }
                | DefinitionKind::Constructor
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub symbol: SymbolId,
    pub name: SmolStr,
    pub kind: DefinitionKind,
    /// The scope the definition is visible *from* — not necessarily its own
    /// body scope. Must exist in the same file's scope tree.
    pub defining_scope: ScopeId,
    pub visibility: Visibility,
    /// For methods, constructors and fields: the type that declares them.
    pub member_of: Option<SymbolId>,
    pub location: Location,
}
