//! Tool-specific error types.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;

use crate::domains::brevo::BrevoError;

/// Result type for tool calls.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur while dispatching or executing a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// No Brevo credential has been supplied yet.
    #[error("Brevo client is not configured: set BREVO_API_KEY")]
    NotConfigured,

    /// A credential was supplied after the dispatcher was already configured.
    #[error("Brevo client is already configured")]
    AlreadyConfigured,

    /// Arguments do not match the tool's input schema.
    #[error("Invalid arguments: {0}")]
    Validation(String),

    /// The host cancelled the request before it completed.
    #[error("Tool call cancelled")]
    Cancelled,

    /// The Brevo API call failed.
    #[error(transparent)]
    Brevo(#[from] BrevoError),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Render this error as an error-flagged tool result.
    pub fn into_call_result(self) -> CallToolResult {
        CallToolResult::error(vec![Content::text(format!("Error: {self}"))])
    }
}

impl From<validator::ValidationErrors> for ToolError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
