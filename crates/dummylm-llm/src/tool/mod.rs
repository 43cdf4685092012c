//! Tools an agent can declare and run on the model's behalf

pub mod weather;

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

pub use weather::GetWeather;

use crate::error::LlmError;
use crate::types::ToolDefinition;

/// A function the model may ask the agent to call
pub trait Tool: Send + Sync {
    /// Name the model uses to request this tool
    fn name(&self) -> &str;

    /// Human-readable description sent alongside the definition
    fn description(&self) -> &str;

    /// JSON Schema of the arguments object
    fn parameters(&self) -> Value;

    /// Run the tool with already-decoded arguments
    fn call(&self, arguments: &Value) -> Result<Value, LlmError>;

    /// Definition advertised to the model
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(self.name(), self.description(), self.parameters())
    }
}

/// Tools keyed by name, in declaration order
#[derive(Clone, Default)]
pub struct ToolSet {
    tools: IndexMap<String, Arc<dyn Tool>>,
}

impl ToolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool, replacing any tool with the same name
    #[must_use]
    pub fn with(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.insert(tool.name().to_owned(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Definitions of every tool, in declaration order
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }

    /// Run the tool called `name`
    ///
    /// # Errors
    ///
    /// Returns `LlmError::ToolNotFound` for an undeclared name, or whatever
    /// the tool itself reports
    pub fn call(&self, name: &str, arguments: &Value) -> Result<Value, LlmError> {
        let tool = self.get(name).ok_or_else(|| LlmError::ToolNotFound { tool: name.to_owned() })?;

        tracing::debug!(tool = %name, "calling tool");
        tool.call(arguments)
    }
}

impl std::fmt::Debug for ToolSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSet")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn calls_declared_tool() {
        let tools = ToolSet::new().with(Arc::new(GetWeather));
        let result = tools.call("get_weather", &json!({"city": "New York"})).unwrap();
        assert_eq!(result["status"], "success");
    }

    #[test]
    fn empty_set_declares_nothing() {
        let tools = ToolSet::new();

        assert!(tools.is_empty());
        assert!(tools.definitions().is_empty());
        assert!(!tools.with(Arc::new(GetWeather)).is_empty());
    }

    #[test]
    fn unknown_tool_is_not_found() {
        let err = ToolSet::new().call("get_time", &json!({})).unwrap_err();
        assert!(matches!(err, LlmError::ToolNotFound { tool } if tool == "get_time"));
    }

    #[test]
    fn definitions_follow_declaration_order() {
        let tools = ToolSet::new().with(Arc::new(GetWeather));
        let definitions = tools.definitions();

        assert_eq!(tools.len(), 1);
        assert_eq!(definitions[0].tool_type, "function");
        assert_eq!(definitions[0].function.name, "get_weather");
        assert!(definitions[0].function.parameters.is_some());
    }
}
