pub mod definition;
pub mod exports;
pub mod index;
pub mod language;
pub mod reference;
pub mod resolution;
pub mod scope;
pub mod symbol;

pub use definition::*;
pub use exports::*;
pub use index::*;
pub use language::*;
pub use reference::*;
pub use resolution::*;
pub use scope::*;
pub use symbol::*;
