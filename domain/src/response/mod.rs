//! LLM response parsing
//!
//! Turns raw model text into structured values. Everything here is pure
//! text processing with no I/O.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`parse_sequence_response`] | generation reply | [`NodeSequence`](crate::NodeSequence) |
//! | [`parse_validation_verdict`] | validation reply | `bool` |
//! | [`strip_code_fence`] | any reply | text without markdown fences |

mod error;
mod fence;
mod literal;
mod sequence;
mod verdict;

pub use error::{LiteralError, ParseError};
pub use fence::strip_code_fence;
pub use literal::parse_string_list;
pub use sequence::{ParseStrategy, parse_sequence_response};
pub use verdict::parse_validation_verdict;
