//! Prompt domain
//!
//! Templates for the generation and validation requests.

mod examples;
mod template;

pub use examples::{FEW_SHOT_EXAMPLES, FewShotExample};
pub use template::PromptTemplate;
