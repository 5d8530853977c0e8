//! Tool Dispatcher - the protocol-facing front door for tool calls.
//!
//! The dispatcher owns the catalog and the (write-once) Brevo client. It is
//! the single place where failures become error-flagged tool results: no
//! error from argument parsing or from the Brevo API escapes `call_tool`.

use std::sync::{Arc, OnceLock};

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use super::error::{ToolError, ToolResult};
use super::registry::ToolRegistry;
use crate::domains::brevo::BrevoClient;

/// Routes tool calls to their handlers.
///
/// Starts unconfigured; [`configure`](Self::configure) supplies the client
/// once. Until then every call fails with [`ToolError::NotConfigured`] while
/// listing keeps working.
#[derive(Default)]
pub struct ToolDispatcher {
    registry: ToolRegistry,
    client: OnceLock<Arc<BrevoClient>>,
}

impl ToolDispatcher {
    /// Create an unconfigured dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher that is already configured with `client`.
    pub fn with_client(client: BrevoClient) -> Self {
        let dispatcher = Self::new();
        let _ = dispatcher.client.set(Arc::new(client));
        dispatcher
    }

    /// Supply the Brevo client. One-way: a second call is rejected.
    pub fn configure(&self, client: BrevoClient) -> ToolResult<()> {
        self.client
            .set(Arc::new(client))
            .map_err(|_| ToolError::AlreadyConfigured)?;
        info!("Tool dispatcher configured");
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.client.get().is_some()
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// The full tool catalog. Does not require configuration.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.list_tools()
    }

    /// Invoke `name` with `arguments`, rendering any failure as an error-flagged result.
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        match self.try_call_tool(name, arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Tool '{}' failed: {}", name, e);
                e.into_call_result()
            }
        }
    }

    async fn try_call_tool(&self, name: &str, arguments: Option<JsonObject>) -> ToolResult<CallToolResult> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))?;
        let client = self.client.get().ok_or(ToolError::NotConfigured)?;

        info!("Calling tool: {}", name);
        tool.execute(client, arguments.unwrap_or_default()).await
    }
}
