//! Backend that greets the last message back

use super::{Provider, ProviderCapabilities};
use crate::error::LlmError;
use crate::types::{ChoiceMessage, CompletionRequest, CompletionResponse, Usage};

/// Fixed response identifier
const RESPONSE_ID: &str = "dummy-response-id";

/// Fixed creation timestamp
const CREATED: u64 = 1_234_567_890;

/// Prefix prepended to the echoed message
const GREETING: &str = "hello ";

/// Stateless backend replying `hello <last message>`
///
/// Token counts are synthetic: one prompt token per message and one
/// completion token per character of the reply.
#[derive(Debug, Clone)]
pub struct EchoProvider {
    name: String,
}

impl EchoProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Provider for EchoProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities { tool_calling: false }
    }

    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let last = request.last_content()?;

        tracing::debug!(provider = %self.name, model = %request.model, "echo completion");

        let prompt_tokens = token_count(request.messages.len());
        let completion_tokens = token_count(last.chars().count() + GREETING.len());

        Ok(CompletionResponse::single(
            RESPONSE_ID,
            CREATED,
            request.model.clone(),
            ChoiceMessage::assistant(format!("{GREETING}{last}"), Vec::new()),
            Usage::new(prompt_tokens, completion_tokens),
        ))
    }
}

fn token_count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FinishReason, Message};

    fn request(contents: &[&str]) -> CompletionRequest {
        CompletionRequest::new("Dummy", contents.iter().map(|c| Message::user(*c)).collect())
    }

    #[test]
    fn greets_last_message() {
        let provider = EchoProvider::new("dummylm");
        let response = provider.complete(&request(&["London"])).unwrap();

        assert_eq!(response.content(), "hello London");
        assert_eq!(response.usage, Usage::new(1, 12));
        assert_eq!(response.usage.total_tokens, 13);
        assert_eq!(response.model, "Dummy");
        assert_eq!(response.id, "dummy-response-id");
        assert_eq!(response.created, 1_234_567_890);
        assert_eq!(response.choices[0].finish_reason, FinishReason::Stop);
        assert!(response.tool_calls().is_empty());
    }

    #[test]
    fn only_last_message_is_echoed() {
        let provider = EchoProvider::new("dummylm");
        let response = provider.complete(&request(&["first", "second", "third"])).unwrap();

        assert_eq!(response.content(), "hello third");
        assert_eq!(response.usage.prompt_tokens, 3);
        assert_eq!(response.usage.completion_tokens, 11);
        assert_eq!(response.usage.total_tokens, 14);
    }

    #[test]
    fn completion_tokens_count_characters() {
        let provider = EchoProvider::new("dummylm");
        let response = provider.complete(&request(&["Zürich"])).unwrap();

        assert_eq!(response.usage.completion_tokens, 12);
    }

    #[test]
    fn totals_hold_for_many_inputs() {
        let provider = EchoProvider::new("dummylm");
        for content in ["", "a", "Tokyo", "a much longer message with spaces"] {
            let response = provider.complete(&request(&[content])).unwrap();
            let usage = response.usage;

            assert_eq!(response.content(), format!("hello {content}"));
            assert_eq!(usage.completion_tokens, token_count(content.chars().count() + 6));
            assert_eq!(usage.total_tokens, usage.prompt_tokens + usage.completion_tokens);
        }
    }

    #[test]
    fn empty_history_is_rejected() {
        let provider = EchoProvider::new("dummylm");
        let err = provider.complete(&request(&[])).unwrap_err();
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn async_entry_point_matches_sync() {
        let provider = EchoProvider::new("dummylm");
        let request = request(&["London"]);

        let sync = provider.complete(&request).unwrap();
        let async_response = provider.acomplete(&request).await.unwrap();
        assert_eq!(sync, async_response);
    }
}
