//! Transactional email tool.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{info, instrument};

use crate::domains::brevo::{BrevoClient, EmailOptions};
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::{ToolHandler, parse_params, text_result};

/// Send a transactional email.
#[derive(Debug, Clone, Default)]
pub struct SendEmailTool;

impl SendEmailTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "send_email";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Send a transactional email via Brevo. \
         Requires at least one recipient, a subject and an HTML body. \
         The server's default sender is used when no sender is given. \
         Returns the Brevo message ID (the message is accepted, not yet delivered).";

    /// Confirmation text embedding the accepted message's ID.
    pub fn confirmation(message_id: &str) -> String {
        format!("Email sent successfully. Message ID: {message_id}")
    }
}

#[async_trait]
impl ToolHandler for SendEmailTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<EmailOptions>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    #[instrument(skip_all, name = "send_email")]
    async fn execute(&self, client: &BrevoClient, arguments: JsonObject) -> ToolResult<CallToolResult> {
        let options: EmailOptions = parse_params(arguments)?;
        info!(
            "Sending '{}' to {} recipient(s)",
            options.subject,
            options.to.len()
        );

        let result = client.send_email(options).await?;
        info!("Email accepted with message ID {}", result.message_id);
        Ok(text_result(Self::confirmation(&result.message_id)))
    }
}
