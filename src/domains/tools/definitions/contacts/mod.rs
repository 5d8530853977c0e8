//! Contact tools: lookup and partial update.

pub mod get_contact;
pub mod update_contact;

pub use get_contact::{GetContactParams, GetContactTool};
pub use update_contact::{UpdateContactParams, UpdateContactTool};
