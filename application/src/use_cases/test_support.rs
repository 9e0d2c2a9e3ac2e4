//! Scripted gateway shared by the use case tests

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use async_trait::async_trait;
use nodeseq_domain::Model;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

type Responder = Box<dyn Fn(&str) -> Result<String, GatewayError> + Send + Sync>;

/// Validation requests are recognised by the first line of their prompt.
const VALIDATION_MARKER: &str = "Original User Request:";

pub(crate) const VALID: &str = r#"{"valid": true}"#;
pub(crate) const INVALID: &str = r#"{"valid": false}"#;

/// Gateway answering generation and validation requests from two responders
pub(crate) struct ScriptedGateway {
    generation: Responder,
    validation: Responder,
    generation_calls: AtomicUsize,
    validation_calls: AtomicUsize,
}

impl ScriptedGateway {
    pub(crate) fn new(
        generation: impl Fn(&str) -> Result<String, GatewayError> + Send + Sync + 'static,
        validation: impl Fn(&str) -> Result<String, GatewayError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            generation: Box::new(generation),
            validation: Box::new(validation),
            generation_calls: AtomicUsize::new(0),
            validation_calls: AtomicUsize::new(0),
        }
    }

    /// Generation answers come from a queue; validation always says `verdict`.
    pub(crate) fn queued(generations: Vec<Result<String, GatewayError>>, verdict: bool) -> Self {
        let queue = Mutex::new(VecDeque::from(generations));
        let answer = if verdict { VALID } else { INVALID };
        Self::new(
            move |_| {
                queue
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or_else(|| Err(GatewayError::Other("script exhausted".to_string())))
            },
            move |_| Ok(answer.to_string()),
        )
    }

    /// Same generation answer every time
    pub(crate) fn constant(generation: &str, verdict: bool) -> Self {
        let generation = generation.to_string();
        let answer = if verdict { VALID } else { INVALID };
        Self::new(
            move |_| Ok(generation.clone()),
            move |_| Ok(answer.to_string()),
        )
    }

    pub(crate) fn generation_calls(&self) -> usize {
        self.generation_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn validation_calls(&self) -> usize {
        self.validation_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn create_session_with_system_prompt(
        &self,
        _model: &Model,
        _system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Err(GatewayError::Other(
            "scripted gateway only answers chat".to_string(),
        ))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        Ok(vec![Model::default()])
    }

    async fn chat(
        &self,
        _model: &Model,
        _system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        if user_prompt.starts_with(VALIDATION_MARKER) {
            self.validation_calls.fetch_add(1, Ordering::SeqCst);
            (self.validation)(user_prompt)
        } else {
            self.generation_calls.fetch_add(1, Ordering::SeqCst);
            (self.generation)(user_prompt)
        }
    }
}

/// JSON object answer carrying `nodes`
pub(crate) fn sequence_json(nodes: &[&str]) -> String {
    let quoted: Vec<String> = nodes.iter().map(|n| format!("\"{}\"", n)).collect();
    format!(r#"{{"sequence": [{}]}}"#, quoted.join(", "))
}
