#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::sync::Arc;

use anyhow::Context;
use args::Args;
use clap::Parser;
use dummylm_config::Config;
use dummylm_llm::tool::{GetWeather, ToolSet};
use dummylm_llm::{Agent, AgentDefinition, ProviderRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(mode) = args.mode {
        config.provider.mode = mode;
    }

    // Initialize telemetry
    dummylm_telemetry::init(&config.telemetry, args.log.as_deref())?;

    tracing::info!(
        provider = %config.provider.id,
        mode = config.provider.mode.as_str(),
        model = %config.agent.model,
        "starting dummylm"
    );

    let registry = ProviderRegistry::from_config(&config.provider);
    let agent = Agent::new(
        AgentDefinition::from(&config.agent),
        ToolSet::new().with(Arc::new(GetWeather)),
    );

    let run = agent.run(&registry, &args.prompt).await?;

    for response in &run.responses {
        let body = serde_json::to_string_pretty(response).context("failed to encode response")?;
        println!("{body}");
    }

    tracing::info!(agent = %agent.definition().name, steps = run.responses.len(), "agent finished");
    Ok(())
}
