//! Sender listing tool.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::domains::brevo::BrevoClient;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::{ToolHandler, json_result, parse_params};

/// The sender listing tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, Validate)]
pub struct ListSendersParams {}

/// List the sender identities configured on the account.
#[derive(Debug, Clone, Default)]
pub struct ListSendersTool;

impl ListSendersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_senders";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List the sender identities (name, email, active status) configured in Brevo.";
}

#[async_trait]
impl ToolHandler for ListSendersTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListSendersParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    #[instrument(skip_all, name = "list_senders")]
    async fn execute(&self, client: &BrevoClient, arguments: JsonObject) -> ToolResult<CallToolResult> {
        let _: ListSendersParams = parse_params(arguments)?;
        json_result(&client.list_senders().await?)
    }
}
