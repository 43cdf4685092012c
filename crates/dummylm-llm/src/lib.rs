//! Mock LLM backends for exercising agent frameworks offline
//!
//! Two backends stand in for a real model: one echoes the last message with
//! fixed metadata, the other asks for a `get_weather` call on its first
//! completion. Replies from the tool-calling backend pass through the same
//! Anthropic conversion a live adapter would use, so callers see ordinary
//! chat-completion responses either way.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod agent;
pub mod convert;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod registry;
pub mod tool;
pub mod types;

pub use agent::{Agent, AgentDefinition, AgentRun};
pub use error::LlmError;
pub use provider::{Provider, ProviderCapabilities};
pub use registry::{ProviderRegistry, ResolvedModel};
pub use types::{CompletionRequest, CompletionResponse};
