//! Application-level configuration.
//!
//! - [`BatchParams`] controls how the batch runner fans out consensus runs

pub mod execution_params;

pub use execution_params::BatchParams;
