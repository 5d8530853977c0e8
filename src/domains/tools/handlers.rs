//! The tool handler trait and the helpers tool definitions share.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

use super::error::{ToolError, ToolResult};
use crate::domains::brevo::BrevoClient;

/// A tool the dispatcher can list and invoke.
///
/// Implementors translate raw tool-call arguments into one Brevo operation
/// and shape its outcome as a tool result. Failures are returned, never
/// rendered here; the dispatcher turns them into error-flagged results.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Name the tool is registered under.
    fn name(&self) -> &'static str;

    /// Descriptor advertised to the host (name, description, input schema).
    fn to_tool(&self) -> Tool;

    /// Run the tool against a configured client.
    async fn execute(&self, client: &BrevoClient, arguments: JsonObject) -> ToolResult<CallToolResult>;
}

/// Deserialize and validate tool arguments into their parameter type.
pub fn parse_params<P>(arguments: JsonObject) -> ToolResult<P>
where
    P: DeserializeOwned + Validate,
{
    let params: P = serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::validation(e.to_string()))?;
    params.validate()?;
    Ok(params)
}

/// A successful result holding one text block.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// A successful result holding the pretty-printed JSON form of `value`.
pub fn json_result<T: Serialize>(value: &T) -> ToolResult<CallToolResult> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| ToolError::validation(format!("failed to render result: {e}")))?;
    Ok(text_result(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(email)]
        email: String,
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_parse_params_accepts_valid_arguments() {
        let probe: Probe = parse_params(args(json!({"email": "a@b.com"}))).unwrap();
        assert_eq!(probe.email, "a@b.com");
    }

    #[test]
    fn test_parse_params_rejects_missing_field() {
        let err = parse_params::<Probe>(args(json!({}))).unwrap_err();
        assert!(matches!(err, ToolError::Validation(ref m) if m.contains("email")));
    }

    #[test]
    fn test_parse_params_rejects_bad_format() {
        let err = parse_params::<Probe>(args(json!({"email": "nope"}))).unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
    }

    #[test]
    fn test_json_result_is_pretty_printed() {
        let result = json_result(&json!({"id": 42})).unwrap();
        assert_eq!(result.is_error, Some(false));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "{\n  \"id\": 42\n}"),
            other => panic!("expected text content, got {:?}", other),
        }
    }
}
