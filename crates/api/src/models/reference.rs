use super::symbol::{Location, Range, ScopeId, SymbolId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    Function,
    Method,
    Constructor,
}

/// A call or member-access site produced by the indexer. Read-only input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The name being invoked: the callee for function/constructor calls, the
    /// final segment of the property chain for method calls.
    pub name: SmolStr,
    /// The scope the reference occurs in.
    pub scope: ScopeId,
    pub call_type: CallType,
    /// Receiver chain for member calls, e.g. `this.field.method()` yields
    /// `["this", "field", "method"]`. Empty for plain calls.
    #[serde(default)]
    pub property_chain: Vec<SmolStr>,
    pub receiver_location: Option<Range>,
    /// The variable the call's result is assigned to, when the indexer saw
    /// one (`let u = new User()`, `const x = f()`). Drives type bindings.
    pub binds: Option<SymbolId>,
    pub location: Location,
}
