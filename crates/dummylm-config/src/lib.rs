//! Configuration for the dummylm demo harness
//!
//! Every section is optional; an empty file (or no file at all) yields the
//! stock demo setup: a tool-calling backend registered as
//! `dummylm` and a `dummy_agent` routed to `dummylm/Dummy`.

#![allow(clippy::must_use_candidate)]

pub mod agent;
mod env;
mod loader;
pub mod provider;
pub mod telemetry;

use serde::Deserialize;

pub use agent::AgentConfig;
pub use provider::{ProviderConfig, ProviderMode};
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level dummylm configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Mock backend registration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Agent definition
    #[serde(default)]
    pub agent: AgentConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
