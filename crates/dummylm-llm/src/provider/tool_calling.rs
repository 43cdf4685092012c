//! Backend that simulates a single tool-calling turn
//!
//! Replies are built in the Anthropic message shape and go through the same
//! conversion a real Anthropic-backed adapter would use.

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::{Map, Value};

use super::{Provider, ProviderCapabilities};
use crate::convert::anthropic::anthropic_to_completion;
use crate::error::LlmError;
use crate::protocol::anthropic::{AnthropicContentBlock, AnthropicMessage};
use crate::tool::GetWeather;
use crate::types::{CompletionRequest, CompletionResponse};

/// Id of the tool use emitted on the first call
pub const TOOL_USE_ID: &str = "toolu_dummy_0001";

/// Prefix of every text reply
const REPLY_PREFIX: &str = "dummy: ";

/// Backend replying `dummy: <last message>`, asking for `get_weather` once
///
/// The first call on an instance also requests `get_weather` with the last
/// message as the city. Every later call answers with text only; build a new
/// instance to start another session.
#[derive(Debug)]
pub struct ToolCallingProvider {
    name: String,
    first_call: AtomicBool,
}

impl ToolCallingProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first_call: AtomicBool::new(true),
        }
    }

    /// Whether the next call will request a tool
    pub fn is_first_call(&self) -> bool {
        self.first_call.load(Ordering::Acquire)
    }
}

impl Provider for ToolCallingProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities { tool_calling: true }
    }

    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let last = request.last_content()?;

        let mut content = vec![AnthropicContentBlock::text(format!("{REPLY_PREFIX}{last}"))];

        if self.first_call.swap(false, Ordering::AcqRel) {
            let mut input = Map::new();
            input.insert("city".to_owned(), Value::String(last.to_owned()));
            content.push(AnthropicContentBlock::tool_use(TOOL_USE_ID, GetWeather::NAME, input));

            tracing::debug!(provider = %self.name, model = %request.model, tool = GetWeather::NAME, "requesting tool call");
        } else {
            tracing::debug!(provider = %self.name, model = %request.model, "text-only completion");
        }

        let message = AnthropicMessage::assistant(content);
        Ok(anthropic_to_completion(&message, &request.model, last))
    }
}
