use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::parse(&raw)?;
        tracing::debug!(path = %path.display(), provider = %config.provider.id, "configuration loaded");

        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable expansion, TOML parsing,
    /// or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the provider id is unusable, the agent model
    /// does not route to the configured provider, or the step limit is zero
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_provider()?;
        self.validate_agent()?;
        Ok(())
    }

    fn validate_provider(&self) -> anyhow::Result<()> {
        let id = &self.provider.id;

        if id.is_empty() {
            anyhow::bail!("provider.id must not be empty");
        }

        if id.contains('/') {
            anyhow::bail!("provider.id '{id}' must not contain '/'");
        }

        Ok(())
    }

    fn validate_agent(&self) -> anyhow::Result<()> {
        let model = &self.agent.model;

        let Some((provider, model_id)) = model.split_once('/') else {
            anyhow::bail!("agent.model '{model}' must use the 'provider/model' form");
        };

        if model_id.is_empty() {
            anyhow::bail!("agent.model '{model}' has an empty model name");
        }

        if provider != self.provider.id {
            anyhow::bail!(
                "agent.model '{model}' routes to provider '{provider}' but the configured provider is '{}'",
                self.provider.id
            );
        }

        if self.agent.max_steps == 0 {
            anyhow::bail!("agent.max_steps must be at least 1");
        }

        Ok(())
    }
}
