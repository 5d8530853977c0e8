//! Tools domain module.
//!
//! Tools are the operations an MCP client can invoke. Each one maps onto a
//! single Brevo API call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The [`ToolHandler`] trait and shared result helpers
//! - `registry.rs` - The static tool catalog
//! - `dispatcher.rs` - Name lookup, configuration state and error rendering
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a params struct and a `ToolHandler` impl
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `ToolRegistry::new()`

pub mod definitions;
mod dispatcher;
mod error;
mod handlers;
mod registry;

pub use dispatcher::ToolDispatcher;
pub use error::{ToolError, ToolResult};
pub use handlers::{ToolHandler, json_result, parse_params, text_result};
pub use registry::ToolRegistry;
