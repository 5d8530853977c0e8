//! MCP Server implementation and lifecycle management.
//!
//! [`McpServer`] implements the rmcp `ServerHandler` trait. Tool listing and
//! tool calls are forwarded to the [`ToolDispatcher`]; this module only adds
//! the protocol plumbing (server info, cancellation).

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::future::Future;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::{BrevoConfig, Config};
use crate::domains::brevo::BrevoClient;
use crate::domains::tools::{ToolDispatcher, ToolError};

const INSTRUCTIONS: &str = "Brevo email marketing tools: look up and update contacts, \
     manage contact attributes, send transactional emails, query email delivery events \
     and list configured senders.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool catalog and call routing, shared by every session.
    dispatcher: Arc<ToolDispatcher>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// The server is configured when `config.brevo` carries an API key and
    /// stays unconfigured otherwise; see [`configure`](Self::configure).
    pub fn new(config: Config) -> crate::Result<Self> {
        let dispatcher = ToolDispatcher::new();

        if config.brevo.has_api_key() {
            dispatcher.configure(BrevoClient::new(&config.brevo)?)?;
        } else {
            warn!("No Brevo API key configured - tool calls will fail until one is supplied");
        }

        Ok(Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        })
    }

    /// Supply the Brevo API key after startup. Only the first call succeeds.
    pub fn configure(&self, api_key: impl Into<String>) -> crate::Result<()> {
        let brevo = BrevoConfig {
            api_key: Some(api_key.into()),
            ..self.config.brevo.clone()
        };
        self.dispatcher.configure(BrevoClient::new(&brevo)?)?;
        Ok(())
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn is_configured(&self) -> bool {
        self.dispatcher.is_configured()
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.dispatcher.list_tools()
    }

    /// Call a tool by name. Failures come back as error-flagged results.
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.dispatcher.call_tool(name, arguments).await
    }

    /// Call a tool, giving up as soon as `cancelled` resolves.
    ///
    /// The in-flight upstream request is dropped on cancellation and the call
    /// resolves to an error-flagged "cancelled" result.
    pub async fn call_tool_until_cancelled<C>(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        cancelled: C,
    ) -> CallToolResult
    where
        C: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancelled => {
                warn!("Tool call cancelled by client");
                ToolError::Cancelled.into_call_result()
            }
            result = self.dispatcher.call_tool(name, arguments) => result,
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip_all)]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .call_tool_until_cancelled(&request.name, request.arguments, context.ct.cancelled())
            .await)
    }
}
