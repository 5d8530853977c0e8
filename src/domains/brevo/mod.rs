//! Brevo domain: the REST adapter in front of the Brevo v3 API.
//!
//! - `client.rs` - [`BrevoClient`], one authenticated HTTP client with one method per operation
//! - `types.rs` - request/response DTOs
//! - `error.rs` - [`BrevoError`]

mod client;
mod error;
pub mod types;

pub use client::{BrevoClient, DEFAULT_BASE_URL, contact_path, events_path};
pub use error::{BrevoError, BrevoResult};
pub use types::{
    AttributeType, Attributes, Contact, ContactAttribute, ContactIdentifier, ContactUpdate,
    EmailEvent, EmailOptions, EmailSendResult, Recipient, Sender,
};
