//! Provider trait and the mock backends

pub mod echo;
pub mod tool_calling;

use std::sync::Arc;

use async_trait::async_trait;
use dummylm_config::{ProviderConfig, ProviderMode};

pub use echo::EchoProvider;
pub use tool_calling::ToolCallingProvider;

use crate::error::LlmError;
use crate::types::{CompletionRequest, CompletionResponse};

/// Capabilities advertised by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderCapabilities {
    /// Whether responses may carry tool calls
    pub tool_calling: bool,
}

/// Trait implemented by each model backend
///
/// Agent frameworks call either entry point; the asynchronous one exists to
/// satisfy callers that await their backend and must behave exactly like
/// the synchronous one.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Advertised capabilities
    fn capabilities(&self) -> ProviderCapabilities;

    /// Produce a completion for `request`
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Asynchronous entry point, delegating to [`Provider::complete`]
    async fn acomplete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.complete(request)
    }
}

/// Build the backend selected by configuration, named after its provider id
pub fn from_config(config: &ProviderConfig) -> Arc<dyn Provider> {
    match config.mode {
        ProviderMode::Echo => Arc::new(EchoProvider::new(config.id.clone())),
        ProviderMode::ToolCalling => Arc::new(ToolCallingProvider::new(config.id.clone())),
    }
}
