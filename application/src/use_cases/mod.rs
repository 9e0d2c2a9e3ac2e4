//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate;
pub mod run_batch;
pub mod run_consensus;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;
