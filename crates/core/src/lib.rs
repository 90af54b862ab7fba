//! Symscope's resolution engine: turns per-file semantic indices into one
//! consistent project-wide map of resolved symbols.

pub mod calls;
pub mod engine;
pub mod error;
pub mod project;
pub mod resolver;
pub mod types;

pub use engine::{ResolutionEngine, ResolutionOutput};
pub use error::{ResolveError, Result};
pub use project::{ProjectIndex, RejectedFile};
