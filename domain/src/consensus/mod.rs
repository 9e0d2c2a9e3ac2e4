//! Sequence consensus domain
//!
//! Pure building blocks of the generate → validate → fall back loop.
//! The loop itself lives in the application layer; everything here is
//! deterministic and free of I/O.
//!
//! # Flow
//!
//! ```text
//! attempt 1..=max_attempts
//!   generate ──(transport / parse error)──────────────► next attempt
//!      │
//!   structural gate ──(unknown names)──────────────────► next attempt
//!      │
//!   record in tally
//!      │
//!   validate × threshold ──(first failure)─────────────► next attempt
//!      │
//!   all passed ──► Validated
//!
//! budget exhausted ──► tally.most_frequent() ──► BestEffort | Failed
//! ```

pub mod attempt;
pub mod policy;
pub mod result;
pub mod tally;
pub mod trace;

pub use attempt::AttemptFailure;
pub use policy::ConsensusPolicy;
pub use result::{ConsensusResult, ConsensusStatus};
pub use tally::SequenceTally;
pub use trace::{ConsensusTrace, TraceEntry, TraceLevel};
