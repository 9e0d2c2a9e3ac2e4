//! Evaluation domain
//!
//! Test cases pairing a prompt with its expected sequence, and the flat
//! report a batch run produces.

pub mod report;
pub mod test_case;

pub use report::{BatchReport, CaseReport, CaseVerdict};
pub use test_case::TestCase;
