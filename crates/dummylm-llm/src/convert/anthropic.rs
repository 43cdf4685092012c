//! Conversion from an Anthropic message to the generic response shape

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::protocol::anthropic::{AnthropicContentBlock, AnthropicMessage};
use crate::types::{ChoiceMessage, CompletionResponse, ToolCall, Usage};

/// Prefix of ids generated for messages that carry none
const FALLBACK_ID_PREFIX: &str = "anthropic-";

/// Arguments recorded for a tool use that supplied no input
const EMPTY_ARGUMENTS: &str = "{}";

/// Convert an Anthropic message into a generic chat-completion response
///
/// `prompt` is the text that produced the message; it only feeds tracing.
pub fn anthropic_to_completion(message: &AnthropicMessage, model_name: &str, prompt: &str) -> CompletionResponse {
    anthropic_to_completion_at(message, model_name, prompt, now_secs())
}

/// Same as [`anthropic_to_completion`] with an explicit clock reading
///
/// `now` becomes `created` and, when the message has no id, part of the
/// generated id.
pub fn anthropic_to_completion_at(
    message: &AnthropicMessage,
    model_name: &str,
    prompt: &str,
    now: u64,
) -> CompletionResponse {
    let content = message
        .content
        .iter()
        .find_map(|block| match block {
            AnthropicContentBlock::Text { text } => Some(text.as_str()),
            AnthropicContentBlock::ToolUse { .. } => None,
        })
        .unwrap_or_default();

    let mut tool_calls: Vec<ToolCall> = Vec::new();
    for block in &message.content {
        if let AnthropicContentBlock::ToolUse { id, name, input } = block {
            let id = id
                .as_deref()
                .filter(|id| !id.is_empty())
                .map_or_else(|| format!("call_{}", tool_calls.len()), str::to_owned);
            let name = name.clone().unwrap_or_default();
            let arguments = input
                .as_ref()
                .filter(|input| !input.is_empty())
                .map_or_else(|| Value::String(EMPTY_ARGUMENTS.to_owned()), |input| Value::Object(input.clone()));

            tool_calls.push(ToolCall::function(id, name, arguments));
        }
    }

    let id = message
        .id
        .clone()
        .unwrap_or_else(|| format!("{FALLBACK_ID_PREFIX}{now}"));

    let usage = message.usage.map_or(Usage::UNKNOWN, |reported| {
        let mut usage = Usage::UNKNOWN;
        if let Some(input_tokens) = reported.input_tokens {
            usage.prompt_tokens = input_tokens;
        }
        if let Some(output_tokens) = reported.output_tokens {
            usage.completion_tokens = output_tokens;
        }
        usage.recompute_total();
        usage
    });

    tracing::trace!(
        model = %model_name,
        prompt_chars = prompt.chars().count(),
        tool_calls = tool_calls.len(),
        "converted anthropic message"
    );

    CompletionResponse::single(id, now, model_name, ChoiceMessage::assistant(content, tool_calls), usage)
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
