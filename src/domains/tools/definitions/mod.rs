//! Tool definitions module.
//!
//! One file per tool, grouped by Brevo area.

pub mod attributes;
pub mod contacts;
pub mod email;

pub use attributes::{CreateAttributeParams, CreateAttributeTool, ListAttributesTool};
pub use contacts::{GetContactParams, GetContactTool, UpdateContactParams, UpdateContactTool};
pub use email::{GetEmailEventsParams, GetEmailEventsTool, ListSendersTool, SendEmailTool};
