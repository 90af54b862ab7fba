//! Shared data model for the symscope resolution engine.
//!
//! Language front-ends (JS/TS/Python/Rust indexers) normalize their output to
//! the types in this crate before handing it to `symscope-core`; downstream
//! consumers (call-graph builders, navigation tooling) read the same types
//! back out. Nothing in here performs resolution.

pub mod models;

pub use models::*;
