//! Interactive chat module
//!
//! Provides a readline-based interactive interface for generating node
//! sequences.

mod repl;

pub use repl::ChatRepl;
