//! Contact attribute creation tool.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::domains::brevo::{AttributeType, BrevoClient};
use crate::domains::tools::error::ToolResult;
use crate::domains::tools::handlers::{ToolHandler, parse_params, text_result};

/// Parameters for the attribute creation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateAttributeParams {
    /// Attribute name, e.g. `COMPANY`.
    #[validate(length(min = 1, message = "attribute name must not be empty"))]
    #[schemars(description = "Name of the new contact attribute")]
    pub name: String,

    /// Value type of the attribute.
    #[serde(default, rename = "type")]
    #[schemars(description = "Attribute type: text, date, float or boolean (default: text)")]
    pub attribute_type: AttributeType,
}

/// Create a new `normal` contact attribute.
#[derive(Debug, Clone, Default)]
pub struct CreateAttributeTool;

impl CreateAttributeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_attribute";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new contact attribute (custom CRM field) in Brevo. \
         Supported types are text, date, float and boolean; text is used when no type is given.";
}

#[async_trait]
impl ToolHandler for CreateAttributeTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateAttributeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    #[instrument(skip_all, name = "create_attribute")]
    async fn execute(&self, client: &BrevoClient, arguments: JsonObject) -> ToolResult<CallToolResult> {
        let params: CreateAttributeParams = parse_params(arguments)?;
        info!("Creating {} attribute {}", params.attribute_type, params.name);

        client
            .create_attribute(&params.name, params.attribute_type)
            .await?;
        Ok(text_result(format!(
            "Attribute '{}' created with type {}",
            params.name, params.attribute_type
        )))
    }
}
