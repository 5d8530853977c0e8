//! Tool Registry - the static catalog of every tool the server exposes.

use std::sync::Arc;

use rmcp::model::Tool;

use super::definitions::{
    CreateAttributeTool, GetContactTool, GetEmailEventsTool, ListAttributesTool, ListSendersTool,
    SendEmailTool, UpdateContactTool,
};
use super::handlers::ToolHandler;

/// Fixed, ordered set of tool handlers, looked up by name.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create the registry holding every Brevo tool.
    pub fn new() -> Self {
        Self {
            tools: vec![
                Arc::new(GetContactTool),
                Arc::new(UpdateContactTool),
                Arc::new(CreateAttributeTool),
                Arc::new(ListAttributesTool),
                Arc::new(SendEmailTool),
                Arc::new(GetEmailEventsTool),
                Arc::new(ListSendersTool),
            ],
        }
    }

    /// Names of all registered tools, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Descriptors for all registered tools, in catalog order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.to_tool()).collect()
    }

    /// Find the handler registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.tools.iter().find(|t| t.name() == name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
