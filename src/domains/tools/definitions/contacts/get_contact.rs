//! Contact lookup tool.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::domains::brevo::{BrevoClient, ContactIdentifier};
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::{ToolHandler, json_result, parse_params};

/// Parameters for the contact lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct GetContactParams {
    /// Numeric contact ID, or the contact's email address.
    #[schemars(description = "Contact ID (integer) or email address (string)")]
    pub identifier: ContactIdentifier,
}

/// Fetch a single contact's details.
#[derive(Debug, Clone, Default)]
pub struct GetContactTool;

impl GetContactTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_contact";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a contact's details from Brevo. \
         The identifier is either the numeric contact ID or the contact's email address. \
         Returns the contact record (email, ID, blacklist flags, list memberships and attributes) as JSON.";
}

#[async_trait]
impl ToolHandler for GetContactTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetContactParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    #[instrument(skip_all, name = "get_contact")]
    async fn execute(&self, client: &BrevoClient, arguments: JsonObject) -> ToolResult<CallToolResult> {
        let params: GetContactParams = parse_params(arguments)?;
        info!("Looking up contact {:?}", params.identifier);

        let contact = client.get_contact(&params.identifier).await?;
        json_result(&contact)
    }
}
