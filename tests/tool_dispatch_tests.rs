//! End-to-end tool calls through the dispatcher against a mock Brevo API.

use brevo_mcp_server::core::BrevoConfig;
use brevo_mcp_server::domains::brevo::BrevoClient;
use brevo_mcp_server::domains::tools::ToolDispatcher;
use rmcp::model::{CallToolResult, JsonObject, RawContent};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dispatcher_for(server: &MockServer, default_sender: Option<&str>) -> ToolDispatcher {
    let client = BrevoClient::new(&BrevoConfig {
        api_key: Some("K".to_string()),
        base_url: server.uri(),
        default_sender_email: default_sender.map(str::to_string),
        ..Default::default()
    })
    .unwrap();
    ToolDispatcher::with_client(client)
}

fn args(value: Value) -> Option<JsonObject> {
    value.as_object().cloned()
}

fn text_of(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        other => panic!("expected text content, got {:?}", other),
    }
}

#[tokio::test]
async fn get_contact_returns_pretty_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/42"))
        .and(header("api-key", "K"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42, "email": "a@b.com"})))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server, None);
    let result = dispatcher
        .call_tool("get_contact", args(json!({"identifier": 42})))
        .await;

    assert_eq!(result.is_error, Some(false));
    let text = text_of(&result);
    assert!(text.contains('\n'));
    let parsed: Value = serde_json::from_str(text).unwrap();
    assert_eq!(parsed, json!({"id": 42, "email": "a@b.com"}));
}

#[tokio::test]
async fn get_contact_by_email_uses_encoded_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/ada%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "email": "ada@example.com"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, None)
        .call_tool("get_contact", args(json!({"identifier": "ada@example.com"})))
        .await;
    assert_eq!(result.is_error, Some(false));
}

#[tokio::test]
async fn update_contact_confirms_on_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/contacts/7"))
        .and(body_json(json!({"emailBlacklisted": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, None)
        .call_tool("update_contact", args(json!({"id": 7, "emailBlacklisted": true})))
        .await;
    assert_eq!(result.is_error, Some(false));
    assert_eq!(text_of(&result), "Contact 7 updated successfully");
}

#[tokio::test]
async fn update_contact_without_changes_never_calls_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, None)
        .call_tool("update_contact", args(json!({"id": 7})))
        .await;
    assert_eq!(result.is_error, Some(true));
    assert!(text_of(&result).starts_with("Error: Invalid arguments"));
}

#[tokio::test]
async fn create_attribute_defaults_to_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contacts/attributes/normal/COMPANY"))
        .and(body_json(json!({"type": "text"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, None)
        .call_tool("create_attribute", args(json!({"name": "COMPANY"})))
        .await;
    assert_eq!(result.is_error, Some(false));
    assert_eq!(text_of(&result), "Attribute 'COMPANY' created with type text");
}

#[tokio::test]
async fn list_attributes_renders_the_unwrapped_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes": [{"name": "LASTNAME", "category": "normal", "type": "text"}]
        })))
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, None)
        .call_tool("list_attributes", None)
        .await;
    let parsed: Value = serde_json::from_str(text_of(&result)).unwrap();
    assert!(parsed.is_array());
    assert_eq!(parsed[0]["name"], json!("LASTNAME"));
}

#[tokio::test]
async fn send_email_uses_default_sender() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/smtp/email"))
        .and(body_partial_json(json!({
            "to": [{"email": "x@y.com"}],
            "sender": {"email": "noreply@z.com", "name": "noreply"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"messageId": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, Some("noreply@z.com"))
        .call_tool(
            "send_email",
            args(json!({
                "to": [{"email": "x@y.com"}],
                "subject": "Hi",
                "htmlContent": "<p>hi</p>"
            })),
        )
        .await;
    assert_eq!(result.is_error, Some(false));
    assert_eq!(text_of(&result), "Email sent successfully. Message ID: abc123");
}

#[tokio::test]
async fn send_email_without_any_sender_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, None)
        .call_tool(
            "send_email",
            args(json!({
                "to": [{"email": "x@y.com"}],
                "subject": "Hi",
                "htmlContent": "<p>hi</p>"
            })),
        )
        .await;
    assert_eq!(result.is_error, Some(true));
}

#[tokio::test]
async fn send_email_with_no_recipients_is_rejected_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, Some("noreply@z.com"))
        .call_tool(
            "send_email",
            args(json!({"to": [], "subject": "Hi", "htmlContent": "<p>hi</p>"})),
        )
        .await;
    assert_eq!(result.is_error, Some(true));
}

#[tokio::test]
async fn email_events_forward_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/smtp/statistics/events"))
        .and(query_param("messageId", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [{"event": "delivered", "messageId": "abc123"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, None)
        .call_tool("get_email_events", args(json!({"messageId": "abc123"})))
        .await;
    let parsed: Value = serde_json::from_str(text_of(&result)).unwrap();
    assert_eq!(parsed[0]["event"], json!("delivered"));
}

#[tokio::test]
async fn email_events_ignore_blank_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/smtp/statistics/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"events": []})))
        .expect(1)
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, None)
        .call_tool(
            "get_email_events",
            args(json!({"messageId": "abc", "email": ""})),
        )
        .await;
    assert_eq!(result.is_error, Some(false));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("messageId=abc"));
}

#[tokio::test]
async fn list_senders_is_passed_through() {
    let server = MockServer::start().await;
    let body = json!({"senders": [{"id": 1, "email": "team@z.com"}]});
    Mock::given(method("GET"))
        .and(path("/senders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, None)
        .call_tool("list_senders", None)
        .await;
    let parsed: Value = serde_json::from_str(text_of(&result)).unwrap();
    assert_eq!(parsed, body);
}

#[tokio::test]
async fn upstream_failure_becomes_error_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Contact does not exist"))
        .mount(&server)
        .await;

    let result = dispatcher_for(&server, None)
        .call_tool("get_contact", args(json!({"identifier": 99})))
        .await;
    assert_eq!(result.is_error, Some(true));
    let text = text_of(&result);
    assert!(text.starts_with("Error: "));
    assert!(text.contains("404"));
    assert!(text.contains("Contact does not exist"));
}

#[tokio::test]
async fn unknown_tool_is_reported_without_upstream_call() {
    let server = MockServer::start().await;
    let result = dispatcher_for(&server, None)
        .call_tool("delete_everything", None)
        .await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(text_of(&result), "Error: Unknown tool: delete_everything");
    assert!(server.received_requests().await.unwrap().is_empty());
}
