use thiserror::Error;

/// Errors that can occur while serving or consuming mock completions
#[derive(Debug, Error)]
pub enum LlmError {
    /// Caller sent a malformed or invalid request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An untyped request lacked a required key
    #[error("missing field: {field}")]
    MissingField { field: String },

    /// No backend is registered under this provider id
    #[error("provider not found: {provider}")]
    ProviderNotFound { provider: String },

    /// The model asked for a tool the agent does not declare
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// The agent kept receiving tool calls past its step limit
    #[error("step limit of {steps} exceeded")]
    StepLimitExceeded { steps: u32 },

    /// JSON encoding or decoding failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl LlmError {
    /// Machine-readable error type (e.g. `invalid_request_error`)
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) | Self::MissingField { .. } => "invalid_request_error",
            Self::ProviderNotFound { .. } | Self::ToolNotFound { .. } => "not_found_error",
            Self::StepLimitExceeded { .. } => "step_limit_error",
            Self::Serialization(_) => "serialization_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_details() {
        let err = LlmError::MissingField {
            field: "messages[0].content".to_owned(),
        };
        assert_eq!(err.to_string(), "missing field: messages[0].content");

        let err = LlmError::ProviderNotFound {
            provider: "openai".to_owned(),
        };
        assert_eq!(err.to_string(), "provider not found: openai");
    }

    #[test]
    fn request_problems_share_a_type() {
        assert_eq!(
            LlmError::InvalidRequest("empty".to_owned()).error_type(),
            "invalid_request_error"
        );
        assert_eq!(
            LlmError::MissingField {
                field: "model".to_owned()
            }
            .error_type(),
            "invalid_request_error"
        );
    }

    #[test]
    fn json_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LlmError = json_err.into();
        assert_eq!(err.error_type(), "serialization_error");
    }
}
