//! Contact attribute listing tool.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::domains::brevo::BrevoClient;
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::{ToolHandler, json_result, parse_params};

/// The attribute listing tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, Validate)]
pub struct ListAttributesParams {}

/// List every contact attribute defined on the account.
#[derive(Debug, Clone, Default)]
pub struct ListAttributesTool;

impl ListAttributesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_attributes";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all contact attributes (custom CRM fields) defined in Brevo, \
         with their name, category and type.";
}

#[async_trait]
impl ToolHandler for ListAttributesTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListAttributesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    #[instrument(skip_all, name = "list_attributes")]
    async fn execute(&self, client: &BrevoClient, arguments: JsonObject) -> ToolResult<CallToolResult> {
        let _: ListAttributesParams = parse_params(arguments)?;

        let attributes = client.list_attributes().await?;
        info!("Listed {} attribute(s)", attributes.len());
        json_result(&attributes)
    }
}
