//! Provider registration and `provider/model` resolution
//!
//! Agents name their model as `provider/model` (e.g. `dummylm/Dummy`). The
//! registry maps the provider half to a registered backend and hands the
//! backend a request carrying only the model half.

use std::sync::Arc;

use dummylm_config::ProviderConfig;
use indexmap::IndexMap;

use crate::error::LlmError;
use crate::provider::{self, Provider};
use crate::types::{CompletionRequest, CompletionResponse};

/// Resolved target for a model string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    /// Provider id (key in the registry)
    pub provider_name: String,
    /// Model identifier handed to the provider
    pub model_id: String,
}

/// Registered backends keyed by provider id
#[derive(Default)]
pub struct ProviderRegistry {
    providers: IndexMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the backend described by `config`
    pub fn from_config(config: &ProviderConfig) -> Self {
        let mut registry = Self::new();
        registry.register(config.id.clone(), provider::from_config(config));
        registry
    }

    /// Register `provider` under `id`, returning the backend it replaced
    pub fn register(&mut self, id: impl Into<String>, provider: Arc<dyn Provider>) -> Option<Arc<dyn Provider>> {
        let id = id.into();
        tracing::debug!(provider = %id, backend = %provider.name(), "registering provider");
        self.providers.insert(id, provider)
    }

    /// Backend registered under `id`
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Provider>> {
        self.providers.get(id)
    }

    /// Registered provider ids, in registration order
    pub fn provider_ids(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    /// Resolve a `provider/model` string
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidRequest` if the string is not of the form
    /// `provider/model` with both halves non-empty.
    /// Returns `LlmError::ProviderNotFound` if no backend is registered
    /// under the provider half.
    pub fn resolve(&self, model: &str) -> Result<ResolvedModel, LlmError> {
        let Some((provider_name, model_id)) = model.split_once('/') else {
            return Err(LlmError::InvalidRequest(format!(
                "model '{model}' must use the 'provider/model' form"
            )));
        };

        if provider_name.is_empty() || model_id.is_empty() {
            return Err(LlmError::InvalidRequest(format!(
                "model '{model}' must name both a provider and a model"
            )));
        }

        if !self.providers.contains_key(provider_name) {
            return Err(LlmError::ProviderNotFound {
                provider: provider_name.to_owned(),
            });
        }

        Ok(ResolvedModel {
            provider_name: provider_name.to_owned(),
            model_id: model_id.to_owned(),
        })
    }

    /// Route a request to its backend's synchronous entry point
    pub fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let (provider, routed) = self.route(request)?;
        provider.complete(&routed)
    }

    /// Route a request to its backend's asynchronous entry point
    pub async fn acomplete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let (provider, routed) = self.route(request)?;
        provider.acomplete(&routed).await
    }

    fn route(&self, request: &CompletionRequest) -> Result<(&Arc<dyn Provider>, CompletionRequest), LlmError> {
        let resolved = self.resolve(&request.model)?;

        let provider = self
            .providers
            .get(&resolved.provider_name)
            .ok_or_else(|| LlmError::ProviderNotFound {
                provider: resolved.provider_name.clone(),
            })?;

        tracing::debug!(
            provider = %resolved.provider_name,
            model = %resolved.model_id,
            messages = request.messages.len(),
            "routing completion"
        );

        let mut routed = request.clone();
        routed.model = resolved.model_id;

        Ok((provider, routed))
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}
