//! Sequence generation
//!
//! One generation request: prompt the model, parse whatever comes back.

use crate::ports::llm_gateway::LlmGateway;
use nodeseq_domain::util::log_preview;
use nodeseq_domain::{
    AttemptFailure, Model, NodeSequence, NodeVocabulary, PromptTemplate, UserQuery,
    parse_sequence_response,
};
use std::sync::Arc;
use tracing::debug;

/// Longest raw-response excerpt written to the debug log, in characters
const RAW_PREVIEW_CHARS: usize = 200;

/// Asks the model for a candidate sequence
pub struct SequenceGenerator<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    vocabulary: Arc<NodeVocabulary>,
    system_prompt: Arc<str>,
}

impl<G: LlmGateway + 'static> Clone for SequenceGenerator<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            vocabulary: Arc::clone(&self.vocabulary),
            system_prompt: Arc::clone(&self.system_prompt),
        }
    }
}

impl<G: LlmGateway + 'static> SequenceGenerator<G> {
    pub fn new(gateway: Arc<G>, vocabulary: Arc<NodeVocabulary>) -> Self {
        let system_prompt: Arc<str> = PromptTemplate::system(&vocabulary).into();
        Self::with_system_prompt(gateway, vocabulary, system_prompt)
    }

    pub fn with_system_prompt(
        gateway: Arc<G>,
        vocabulary: Arc<NodeVocabulary>,
        system_prompt: Arc<str>,
    ) -> Self {
        Self {
            gateway,
            vocabulary,
            system_prompt,
        }
    }

    pub fn system_prompt(&self) -> &Arc<str> {
        &self.system_prompt
    }

    /// Request and parse one candidate.
    ///
    /// Membership in the vocabulary is not checked here.
    pub async fn generate(
        &self,
        query: &UserQuery,
        model: &Model,
    ) -> Result<NodeSequence, AttemptFailure> {
        let prompt = PromptTemplate::generation_prompt(query.content(), &self.vocabulary);

        let raw = self
            .gateway
            .chat(model, &self.system_prompt, &prompt)
            .await
            .map_err(|e| AttemptFailure::Transport(e.to_string()))?;

        debug!(
            "Raw generation from {}: {}",
            model,
            log_preview(&raw, RAW_PREVIEW_CHARS)
        );

        Ok(parse_sequence_response(&raw)?)
    }
}
