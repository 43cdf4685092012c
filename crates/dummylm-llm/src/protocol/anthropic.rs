//! Anthropic Messages API response shape
//!
//! Every key inside a content block or the usage object is optional here:
//! the translator fills gaps with defaults instead of rejecting the message.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Assistant message as returned by the Anthropic Messages API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicMessage {
    /// Response identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Role (always "assistant" for responses)
    pub role: String,
    /// Ordered content blocks
    #[serde(default)]
    pub content: Vec<AnthropicContentBlock>,
    /// Token usage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<AnthropicUsage>,
}

impl AnthropicMessage {
    /// Assistant message without id or usage
    pub fn assistant(content: Vec<AnthropicContentBlock>) -> Self {
        Self {
            id: None,
            role: "assistant".to_owned(),
            content,
            usage: None,
        }
    }
}

/// Content block in an Anthropic message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Text content
    Text {
        /// The text string
        text: String,
    },
    /// Tool use request from the assistant
    ToolUse {
        /// Tool use identifier
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// Tool name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Tool input object
        #[serde(default, skip_serializing_if = "Option::is_none")]
        input: Option<Map<String, Value>>,
    },
}

impl AnthropicContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn tool_use(id: impl Into<String>, name: impl Into<String>, input: Map<String, Value>) -> Self {
        Self::ToolUse {
            id: Some(id.into()),
            name: Some(name.into()),
            input: Some(input),
        }
    }
}

/// Anthropic token usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnthropicUsage {
    /// Input tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<i64>,
    /// Output tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<i64>,
}
