//! Contact attribute tools.

pub mod create_attribute;
pub mod list_attributes;

pub use create_attribute::{CreateAttributeParams, CreateAttributeTool};
pub use list_attributes::{ListAttributesParams, ListAttributesTool};
