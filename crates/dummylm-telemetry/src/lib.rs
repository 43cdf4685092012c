//! Logging setup for dummylm
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a fmt
//! layer on stderr, so stdout stays free for command output.

use dummylm_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging from configuration
///
/// The filter is picked from `cli_filter`, then `RUST_LOG`, then the
/// configured filter, skipping blank values. An invalid filter falls back
/// to `info` rather than failing startup.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed
pub fn init(config: &TelemetryConfig, cli_filter: Option<&str>) -> anyhow::Result<()> {
    let env_filter = std::env::var("RUST_LOG").ok();
    let filter = build_filter(cli_filter, env_filter.as_deref(), &config.log_filter);

    let base = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Text => registry.with(base).try_init(),
        LogFormat::Json => registry.with(base.json()).try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(format = ?config.format, "logging initialized");
    Ok(())
}

/// Pick the effective filter: command line, then environment, then config
fn build_filter(cli_filter: Option<&str>, env_filter: Option<&str>, configured: &str) -> EnvFilter {
    let directives = [cli_filter, env_filter]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(configured);
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_is_used_without_override() {
        let filter = build_filter(None, None, "dummylm_llm=debug");
        assert_eq!(filter.to_string(), "dummylm_llm=debug");
    }

    #[test]
    fn env_overrides_config() {
        let filter = build_filter(None, Some("warn"), "debug");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn cli_overrides_env_and_config() {
        let filter = build_filter(Some("debug"), Some("warn"), "error");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let filter = build_filter(Some("  "), Some(""), "debug");
        assert_eq!(filter.to_string(), "debug");

        let filter = build_filter(Some(" "), Some("warn"), "debug");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn invalid_filter_falls_back_to_info() {
        let filter = build_filter(None, None, "dummylm=verbose");
        assert_eq!(filter.to_string(), "info");
    }
}
