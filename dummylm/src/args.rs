use std::path::PathBuf;

use clap::Parser;
use dummylm_config::ProviderMode;

/// Run the demo agent against a mock LLM backend
#[derive(Debug, Parser)]
#[command(name = "dummylm", about = "Drive a demo agent with a mock LLM backend")]
pub struct Args {
    /// Path to configuration file; built-in defaults apply when omitted
    #[arg(short, long, env = "DUMMYLM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the backend mode (`echo` or `tool_calling`)
    #[arg(long, env = "DUMMYLM_MODE")]
    pub mode: Option<ProviderMode>,

    /// Log filter, taking precedence over `RUST_LOG` and the configuration
    #[arg(long)]
    pub log: Option<String>,

    /// User message sent to the agent
    pub prompt: String,
}
