//! Node domain
//!
//! The fixed node taxonomy and the ordered sequences built from it.
//!
//! - [`vocabulary::NodeVocabulary`]: the legal node names, grouped by category
//! - [`sequence::NodeSequence`]: an ordered, order-sensitive list of node names
//! - [`vocabulary::StructuralCheck`]: result of checking a sequence against the vocabulary

pub mod sequence;
pub mod vocabulary;

pub use sequence::NodeSequence;
pub use vocabulary::{NodeCategory, NodeSpec, NodeVocabulary, StructuralCheck};
