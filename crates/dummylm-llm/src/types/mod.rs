//! Provider-agnostic chat-completion types
//!
//! These follow the generic chat-completion shape every backend returns and
//! every agent consumes, independent of any vendor's wire format.

pub mod message;
pub mod request;
pub mod response;
pub mod tool;

pub use message::{FunctionCall, Message, Role, ToolCall};
pub use request::CompletionRequest;
pub use response::{Choice, ChoiceMessage, CompletionResponse, FinishReason, Usage};
pub use tool::{FunctionDefinition, ToolDefinition};
