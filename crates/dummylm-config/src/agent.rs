use serde::Deserialize;

/// Agent definition routed to the mock backend
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Agent name
    #[serde(default = "default_name")]
    pub name: String,
    /// System instruction prepended to every conversation
    #[serde(default = "default_instruction")]
    pub instruction: String,
    /// Model string in `provider/model` form
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on model calls per run
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            instruction: default_instruction(),
            model: default_model(),
            max_steps: default_max_steps(),
        }
    }
}

fn default_name() -> String {
    "dummy_agent".to_owned()
}

fn default_instruction() -> String {
    "You are a helpful assistant powered by GPT-4o.".to_owned()
}

fn default_model() -> String {
    "dummylm/Dummy".to_owned()
}

const fn default_max_steps() -> u32 {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_partial_agent() {
        let toml = r#"
            name = "weather_agent"
            max_steps = 2
        "#;

        let config: AgentConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.name, "weather_agent");
        assert_eq!(config.model, "dummylm/Dummy");
        assert_eq!(config.max_steps, 2);
        assert!(config.instruction.starts_with("You are a helpful assistant"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(toml::from_str::<AgentConfig>("temperature = 0.2").is_err());
    }
}
