//! Transactional email tools: sending, event reports and sender identities.

pub mod email_events;
pub mod list_senders;
pub mod send_email;

pub use email_events::{GetEmailEventsParams, GetEmailEventsTool};
pub use list_senders::{ListSendersParams, ListSendersTool};
pub use send_email::SendEmailTool;
