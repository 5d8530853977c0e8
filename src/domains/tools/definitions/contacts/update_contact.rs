//! Contact update tool.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::domains::brevo::{BrevoClient, ContactUpdate};
use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::handlers::{ToolHandler, parse_params, text_result};

/// Parameters for the contact update tool.
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct UpdateContactParams {
    /// Numeric ID of the contact to update.
    #[schemars(description = "Numeric Brevo contact ID")]
    pub id: i64,

    /// Fields to change. Omitted fields are left untouched.
    #[serde(flatten)]
    #[validate(nested)]
    pub changes: ContactUpdate,
}

/// Apply a partial update to an existing contact.
#[derive(Debug, Clone, Default)]
pub struct UpdateContactTool;

impl UpdateContactTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_contact";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update an existing Brevo contact by numeric ID. \
         Only the supplied fields change: email, emailBlacklisted, smsBlacklisted, listIds \
         (lists to add the contact to) and attributes (custom field values).";
}

#[async_trait]
impl ToolHandler for UpdateContactTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateContactParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    #[instrument(skip_all, name = "update_contact")]
    async fn execute(&self, client: &BrevoClient, arguments: JsonObject) -> ToolResult<CallToolResult> {
        let params: UpdateContactParams = parse_params(arguments)?;
        if params.changes.is_empty() {
            return Err(ToolError::validation("no contact fields to update"));
        }
        info!("Updating contact {}", params.id);

        client.update_contact(params.id, &params.changes).await?;
        Ok(text_result(format!("Contact {} updated successfully", params.id)))
    }
}
