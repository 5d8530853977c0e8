//! Domains module containing business logic organized by bounded contexts.
//!
//! - **brevo**: typed access to the Brevo REST API
//! - **tools**: the MCP tool surface built on top of it

pub mod brevo;
pub mod tools;
