use symscope_api::{ScopeId, SymbolId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("definition {symbol:?} names scope {scope:?} which does not exist in its file")]
    MissingScope { symbol: SymbolId, scope: ScopeId },
    #[error("malformed semantic index: {0}")]
    MalformedIndex(String),
    #[error("re-export cycle while resolving '{name}' through module '{module}'")]
    ImportCycle { module: String, name: String },
    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
