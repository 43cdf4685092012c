use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::message::Message;
use super::tool::ToolDefinition;
use crate::error::LlmError;

/// Chat-completion request handed to a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation history, oldest first
    pub messages: Vec<Message>,
    /// Tool definitions the caller declares
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            tools: None,
        }
    }

    /// Attach tool definitions, dropping the key entirely when there are none
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = if tools.is_empty() { None } else { Some(tools) };
        self
    }

    /// Content of the most recent message
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidRequest` when the history is empty
    pub fn last_content(&self) -> Result<&str, LlmError> {
        self.messages
            .last()
            .map(|message| message.content.as_str())
            .ok_or_else(|| LlmError::InvalidRequest("messages must not be empty".to_owned()))
    }

    /// Parse an untyped JSON request
    ///
    /// Absent keys are reported individually so callers can tell which part
    /// of the payload is missing.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::MissingField` for an absent `model`, `messages`,
    /// or message `content`, and `LlmError::InvalidRequest` for any other
    /// shape mismatch
    pub fn from_json(value: Value) -> Result<Self, LlmError> {
        let Some(object) = value.as_object() else {
            return Err(LlmError::InvalidRequest("request must be a JSON object".to_owned()));
        };

        for field in ["model", "messages"] {
            if !object.contains_key(field) {
                return Err(LlmError::MissingField { field: field.to_owned() });
            }
        }

        if let Some(messages) = object.get("messages").and_then(Value::as_array) {
            for (index, message) in messages.iter().enumerate() {
                if message.get("content").is_none() {
                    return Err(LlmError::MissingField {
                        field: format!("messages[{index}].content"),
                    });
                }
            }
        }

        serde_json::from_value(value).map_err(|e| LlmError::InvalidRequest(e.to_string()))
    }
}
