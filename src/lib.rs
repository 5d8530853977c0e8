//! Brevo MCP Server Library
//!
//! Exposes a handful of Brevo (email marketing) operations as MCP tools:
//! contact lookup and update, contact attribute management, transactional
//! email, email event reports and sender listing.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**
//!   - **brevo**: the REST adapter ([`domains::brevo::BrevoClient`])
//!   - **tools**: the tool catalog and dispatcher ([`domains::tools::ToolDispatcher`])
//!
//! # Example
//!
//! ```rust,no_run
//! use brevo_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
