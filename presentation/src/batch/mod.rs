//! Batch evaluation front end
//!
//! Shared by `--batch` and the REPL `/test` command.

mod presenter;

pub use presenter::{BatchPresenter, TestSuite, TestSuiteError};
