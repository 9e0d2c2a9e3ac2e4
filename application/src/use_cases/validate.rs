//! Semantic validation
//!
//! Asks the model whether a candidate sequence fulfils the request. Every
//! failure along the way counts as a "no".

use crate::ports::llm_gateway::LlmGateway;
use nodeseq_domain::{Model, NodeSequence, PromptTemplate, UserQuery, parse_validation_verdict};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct SemanticValidator<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    system_prompt: Arc<str>,
}

impl<G: LlmGateway + 'static> Clone for SemanticValidator<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            system_prompt: Arc::clone(&self.system_prompt),
        }
    }
}

impl<G: LlmGateway + 'static> SemanticValidator<G> {
    pub fn new(gateway: Arc<G>, system_prompt: Arc<str>) -> Self {
        Self {
            gateway,
            system_prompt,
        }
    }

    /// One yes/no judgement. Transport and parse failures yield `false`.
    pub async fn validate_semantics(
        &self,
        query: &UserQuery,
        sequence: &NodeSequence,
        model: &Model,
    ) -> bool {
        let prompt = PromptTemplate::validation_prompt(query.content(), sequence);

        let raw = match self.gateway.chat(model, &self.system_prompt, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Validation request failed: {}", e);
                return false;
            }
        };

        match parse_validation_verdict(&raw) {
            Ok(valid) => {
                debug!("Validator verdict for {}: {}", sequence, valid);
                valid
            }
            Err(e) => {
                warn!("Unreadable validation verdict: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::use_cases::test_support::ScriptedGateway;

    fn validator_answering(
        answer: impl Fn(&str) -> Result<String, GatewayError> + Send + Sync + 'static,
    ) -> SemanticValidator<ScriptedGateway> {
        let gateway = ScriptedGateway::new(|_| Ok(String::new()), answer);
        SemanticValidator::new(Arc::new(gateway), Arc::from("system"))
    }

    async fn judge(validator: &SemanticValidator<ScriptedGateway>) -> bool {
        let query = UserQuery::try_new("Log a message every second").unwrap();
        let seq = NodeSequence::from(["OnTimer", "Log"]);
        validator
            .validate_semantics(&query, &seq, &Model::default())
            .await
    }

    #[tokio::test]
    async fn test_valid_true() {
        let validator = validator_answering(|_| Ok(r#"{"valid": true}"#.to_string()));
        assert!(judge(&validator).await);
    }

    #[tokio::test]
    async fn test_valid_false() {
        let validator = validator_answering(|_| Ok(r#"{"valid": false}"#.to_string()));
        assert!(!judge(&validator).await);
    }

    #[tokio::test]
    async fn test_fenced_verdict_is_read() {
        let validator =
            validator_answering(|_| Ok("```json\n{\"valid\": true}\n```".to_string()));
        assert!(judge(&validator).await);
    }

    #[tokio::test]
    async fn test_missing_key_fails_closed() {
        let validator = validator_answering(|_| Ok(r#"{"ok": true}"#.to_string()));
        assert!(!judge(&validator).await);
    }

    #[tokio::test]
    async fn test_prose_fails_closed() {
        let validator = validator_answering(|_| Ok("Yes, looks right to me.".to_string()));
        assert!(!judge(&validator).await);
    }

    #[tokio::test]
    async fn test_transport_error_fails_closed() {
        let validator =
            validator_answering(|_| Err(GatewayError::ConnectionError("refused".into())));
        assert!(!judge(&validator).await);
    }

    #[tokio::test]
    async fn test_prompt_contains_candidate() {
        let validator = validator_answering(|prompt| {
            let valid = prompt.contains(r#"["OnTimer", "Log"]"#);
            Ok(format!(r#"{{"valid": {}}}"#, valid))
        });
        assert!(judge(&validator).await);
    }
}
