//! Email event report tool.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};
use tracing::{info, instrument};
use validator::Validate;

use crate::domains::brevo::BrevoClient;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::{ToolHandler, json_result, parse_params};

/// Parameters for the email event report tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetEmailEventsParams {
    /// Only events for this message.
    #[serde(default, deserialize_with = "empty_as_none")]
    #[schemars(description = "Message ID returned by send_email")]
    pub message_id: Option<String>,

    /// Only events for this recipient.
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(email)]
    #[schemars(description = "Recipient email address")]
    pub email: Option<String>,
}

/// Blank filters mean "no filter".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Query delivery events (opens, clicks, bounces, ...) for sent emails.
#[derive(Debug, Clone, Default)]
pub struct GetEmailEventsTool;

impl GetEmailEventsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_email_events";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get delivery events (delivered, opened, clicked, bounced, ...) \
         for transactional emails, optionally filtered by message ID and/or recipient email.";
}

#[async_trait]
impl ToolHandler for GetEmailEventsTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetEmailEventsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    #[instrument(skip_all, name = "get_email_events")]
    async fn execute(&self, client: &BrevoClient, arguments: JsonObject) -> ToolResult<CallToolResult> {
        let params: GetEmailEventsParams = parse_params(arguments)?;

        let events = client
            .get_email_events(params.message_id.as_deref(), params.email.as_deref())
            .await?;
        info!("Fetched {} email event(s)", events.len());
        json_result(&events)
    }
}
