//! Agent definition and a bounded demo turn loop
//!
//! The loop plays the orchestrator's part: it sends the history to the
//! model, runs any tools the model asks for, feeds the results back, and
//! stops at the first reply without tool calls.

use dummylm_config::AgentConfig;
use serde_json::Value;

use crate::error::LlmError;
use crate::registry::ProviderRegistry;
use crate::tool::ToolSet;
use crate::types::{CompletionRequest, CompletionResponse, Message, ToolCall};

/// Static description of an agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDefinition {
    /// Agent name
    pub name: String,
    /// System instruction opening every conversation
    pub instruction: String,
    /// Model string in `provider/model` form
    pub model: String,
    /// Upper bound on model calls per run
    pub max_steps: u32,
}

impl From<&AgentConfig> for AgentDefinition {
    fn from(config: &AgentConfig) -> Self {
        Self {
            name: config.name.clone(),
            instruction: config.instruction.clone(),
            model: config.model.clone(),
            max_steps: config.max_steps,
        }
    }
}

/// Outcome of one agent run
#[derive(Debug, Clone)]
pub struct AgentRun {
    /// Every model response, in order
    pub responses: Vec<CompletionResponse>,
    /// Full conversation history, including tool results
    pub messages: Vec<Message>,
}

impl AgentRun {
    /// The reply that ended the run
    pub fn final_response(&self) -> Option<&CompletionResponse> {
        self.responses.last()
    }
}

/// An agent definition together with the tools it declares
#[derive(Debug, Clone)]
pub struct Agent {
    definition: AgentDefinition,
    tools: ToolSet,
}

impl Agent {
    pub const fn new(definition: AgentDefinition, tools: ToolSet) -> Self {
        Self { definition, tools }
    }

    pub const fn definition(&self) -> &AgentDefinition {
        &self.definition
    }

    /// Answer `input`, calling tools until the model stops asking for them
    ///
    /// # Errors
    ///
    /// Returns routing and provider errors unchanged, `LlmError::ToolNotFound`
    /// for an undeclared tool, and `LlmError::StepLimitExceeded` when the
    /// model still requests tools after `max_steps` calls
    pub async fn run(&self, registry: &ProviderRegistry, input: &str) -> Result<AgentRun, LlmError> {
        let mut messages = vec![Message::system(&self.definition.instruction), Message::user(input)];
        let mut responses = Vec::new();

        for step in 1..=self.definition.max_steps {
            let request =
                CompletionRequest::new(&self.definition.model, messages.clone()).with_tools(self.tools.definitions());

            let response = registry.acomplete(&request).await?;
            let tool_calls = response.tool_calls().to_vec();

            tracing::info!(
                agent = %self.definition.name,
                step,
                tool_calls = tool_calls.len(),
                "model responded"
            );

            messages.push(Message::assistant(
                response.content(),
                (!tool_calls.is_empty()).then(|| tool_calls.clone()),
            ));
            responses.push(response);

            if tool_calls.is_empty() {
                return Ok(AgentRun { responses, messages });
            }

            for call in &tool_calls {
                messages.push(self.run_tool(call)?);
            }
        }

        Err(LlmError::StepLimitExceeded {
            steps: self.definition.max_steps,
        })
    }

    fn run_tool(&self, call: &ToolCall) -> Result<Message, LlmError> {
        let arguments = decode_arguments(&call.function.arguments)?;
        let result = self.tools.call(&call.function.name, &arguments)?;

        tracing::info!(agent = %self.definition.name, tool = %call.function.name, "tool finished");

        Ok(Message::tool_result(call.id.clone(), serde_json::to_string(&result)?))
    }
}

/// Turn tool-call arguments into an object, decoding JSON-encoded strings
fn decode_arguments(arguments: &Value) -> Result<Value, LlmError> {
    match arguments {
        Value::Object(_) => Ok(arguments.clone()),
        Value::String(encoded) => {
            let decoded: Value = serde_json::from_str(encoded)?;
            if decoded.is_object() {
                Ok(decoded)
            } else {
                Err(LlmError::InvalidRequest(format!(
                    "tool arguments must decode to an object, got {decoded}"
                )))
            }
        }
        other => Err(LlmError::InvalidRequest(format!(
            "tool arguments must be an object or a JSON string, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn definition_from_config() {
        let definition = AgentDefinition::from(&AgentConfig::default());

        assert_eq!(definition.name, "dummy_agent");
        assert_eq!(definition.model, "dummylm/Dummy");
        assert_eq!(definition.max_steps, 4);
    }

    #[test]
    fn agent_keeps_its_definition() {
        let definition = AgentDefinition::from(&AgentConfig::default());
        let agent = Agent::new(definition.clone(), ToolSet::new());

        assert_eq!(agent.definition(), &definition);
    }

    #[test]
    fn object_arguments_pass_through() {
        let arguments = json!({"city": "Paris"});
        assert_eq!(decode_arguments(&arguments).unwrap(), arguments);
    }

    #[test]
    fn encoded_arguments_are_decoded() {
        assert_eq!(decode_arguments(&json!("{}")).unwrap(), json!({}));
        assert_eq!(
            decode_arguments(&json!(r#"{"city": "Paris"}"#)).unwrap(),
            json!({"city": "Paris"})
        );
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        assert!(matches!(decode_arguments(&json!("[1]")), Err(LlmError::InvalidRequest(_))));
        assert!(matches!(decode_arguments(&json!(7)), Err(LlmError::InvalidRequest(_))));
        assert!(matches!(decode_arguments(&json!("{")), Err(LlmError::Serialization(_))));
    }
}
