use serde::Deserialize;

/// Registration of the mock completion backend
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Identifier the backend is registered under (the `dummylm` in `dummylm/Dummy`)
    #[serde(default = "default_provider_id")]
    pub id: String,
    /// Which mock behaviour to serve
    #[serde(default)]
    pub mode: ProviderMode,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            id: default_provider_id(),
            mode: ProviderMode::default(),
        }
    }
}

/// Mock backend behaviours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderMode {
    /// Reply `hello <last message>` with synthetic token counts
    Echo,
    /// Reply `dummy: <last message>` and request `get_weather` on the first call
    #[default]
    ToolCalling,
}

impl ProviderMode {
    /// Name used in configuration files and on the command line
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Echo => "echo",
            Self::ToolCalling => "tool_calling",
        }
    }
}

impl std::str::FromStr for ProviderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "echo" => Ok(Self::Echo),
            "tool_calling" => Ok(Self::ToolCalling),
            other => Err(format!("unknown provider mode `{other}` (expected `echo` or `tool_calling`)")),
        }
    }
}

fn default_provider_id() -> String {
    "dummylm".to_owned()
}
