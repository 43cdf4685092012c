use serde::{Deserialize, Serialize};

use super::message::ToolCall;

/// Reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of generation
    Stop,
}

/// Token usage statistics
///
/// Counters are signed: `-1` marks a value the backend did not report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: i64,
    /// Tokens generated in the completion
    pub completion_tokens: i64,
    /// Total tokens (prompt + completion)
    pub total_tokens: i64,
}

impl Usage {
    /// Sentinel for an unreported counter
    pub const UNKNOWN_TOKENS: i64 = -1;

    /// Usage for a backend that reported nothing
    pub const UNKNOWN: Self = Self {
        prompt_tokens: Self::UNKNOWN_TOKENS,
        completion_tokens: Self::UNKNOWN_TOKENS,
        total_tokens: Self::UNKNOWN_TOKENS,
    };

    /// Build usage from the two reported counters
    ///
    /// Unknown (negative) counters are kept as-is but count as zero toward the total.
    pub const fn new(prompt_tokens: i64, completion_tokens: i64) -> Self {
        let mut usage = Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: 0,
        };
        usage.recompute_total();
        usage
    }

    /// Recompute `total_tokens` from the two counters
    pub const fn recompute_total(&mut self) {
        let prompt = if self.prompt_tokens > 0 { self.prompt_tokens } else { 0 };
        let completion = if self.completion_tokens > 0 { self.completion_tokens } else { 0 };
        self.total_tokens = prompt + completion;
    }
}

impl Default for Usage {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

/// A single completion choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Index of this choice
    pub index: u32,
    /// Generated message
    pub message: ChoiceMessage,
    /// Why generation stopped
    pub finish_reason: FinishReason,
}

/// Message content within a response choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Role is always assistant for completions
    pub role: String,
    /// Text content
    pub content: String,
    /// Tool calls requested by the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl ChoiceMessage {
    /// Create an assistant message, omitting `tool_calls` when none were requested
    pub fn assistant(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            role: "assistant".to_owned(),
            content: content.into(),
            tool_calls: if tool_calls.is_empty() { None } else { Some(tool_calls) },
        }
    }
}

/// Generic chat-completion response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Unique response identifier
    pub id: String,
    /// Object type (e.g. "chat.completion")
    pub object: String,
    /// Unix timestamp of creation
    pub created: u64,
    /// Model used for generation
    pub model: String,
    /// Generated choices
    pub choices: Vec<Choice>,
    /// Token usage statistics
    pub usage: Usage,
}

impl CompletionResponse {
    /// Response with a single `stop` choice holding `message`
    pub fn single(
        id: impl Into<String>,
        created: u64,
        model: impl Into<String>,
        message: ChoiceMessage,
        usage: Usage,
    ) -> Self {
        Self {
            id: id.into(),
            object: "chat.completion".to_owned(),
            created,
            model: model.into(),
            choices: vec![Choice {
                index: 0,
                message,
                finish_reason: FinishReason::Stop,
            }],
            usage,
        }
    }

    /// Text of the first choice, empty when there is none
    pub fn content(&self) -> &str {
        self.choices.first().map_or("", |choice| choice.message.content.as_str())
    }

    /// Tool calls of the first choice
    pub fn tool_calls(&self) -> &[ToolCall] {
        self.choices
            .first()
            .and_then(|choice| choice.message.tool_calls.as_deref())
            .unwrap_or_default()
    }
}
