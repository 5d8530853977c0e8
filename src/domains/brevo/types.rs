//! Data transfer objects exchanged with the Brevo REST API.
//!
//! All of these are transient value objects: they are built from a response
//! or assembled by a tool call, sent, and dropped. Open-shaped fields (custom
//! contact attributes, email events) are kept as `serde_json` maps so callers
//! can pattern-match on [`serde_json::Value`] instead of handling raw text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Custom CRM fields keyed by attribute name.
pub type Attributes = Map<String, Value>;

/// A delivery lifecycle event (open, click, bounce, ...). Passed through as-is.
pub type EmailEvent = Map<String, Value>;

/// How a contact is addressed: Brevo's numeric ID or an email/external identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ContactIdentifier {
    /// Numeric contact ID, used verbatim in the path.
    Id(i64),
    /// Email address or other string identifier, percent-encoded in the path.
    Email(String),
}

impl ContactIdentifier {
    /// The path segment addressing this contact.
    pub fn path_segment(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Email(email) => urlencoding::encode(email).into_owned(),
        }
    }
}

impl From<i64> for ContactIdentifier {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ContactIdentifier {
    fn from(email: &str) -> Self {
        Self::Email(email.to_string())
    }
}

/// A contact record as returned by `GET /contacts/{identifier}`.
///
/// Fields Brevo returns beyond the ones modelled here (creation dates,
/// statistics, ...) are kept in `extra` so nothing is lost on the way to the
/// client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_blacklisted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_blacklisted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<i64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial contact payload for `PUT /contacts/{id}`. Only supplied fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    /// New email address for the contact.
    #[validate(email)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Blacklist (or un-blacklist) the contact for email campaigns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_blacklisted: Option<bool>,

    /// Blacklist (or un-blacklist) the contact for SMS campaigns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_blacklisted: Option<bool>,

    /// IDs of the lists the contact should be added to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<i64>>,

    /// Custom attribute values, keyed by attribute name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl ContactUpdate {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.email_blacklisted.is_none()
            && self.sms_blacklisted.is_none()
            && self.list_ids.is_none()
            && self.attributes.is_none()
    }
}

/// A contact attribute definition from `GET /contacts/attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAttribute {
    pub name: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub attribute_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Types a new `normal` attribute can be created with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    #[default]
    Text,
    Date,
    Float,
    Boolean,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Float => "float",
            Self::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single email recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct Recipient {
    /// Recipient email address.
    #[validate(email)]
    pub email: String,

    /// Recipient display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The identity an email is sent from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct Sender {
    /// Sender display name.
    pub name: String,

    /// Sender email address (must be a verified Brevo sender).
    #[validate(email)]
    pub email: String,
}

impl Sender {
    /// Build a sender, defaulting the display name to the local part of the address.
    pub fn new(email: impl Into<String>, name: Option<String>) -> Self {
        let email = email.into();
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());
        Self { name, email }
    }
}

/// A transactional email for `POST /smtp/email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmailOptions {
    /// Recipients, in order. At least one is required.
    #[validate(length(min = 1, message = "at least one recipient is required"), nested)]
    pub to: Vec<Recipient>,

    /// Subject line.
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,

    /// Pre-rendered HTML body.
    pub html_content: String,

    /// Sender identity. The server's default sender is used when omitted.
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<Sender>,
}

/// Brevo's acknowledgement of an accepted (not yet delivered) email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSendResult {
    pub message_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_identifier_is_verbatim() {
        let id: ContactIdentifier = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(id, ContactIdentifier::Id(42));
        assert_eq!(id.path_segment(), "42");
    }

    #[test]
    fn test_string_identifier_is_percent_encoded() {
        let id: ContactIdentifier = serde_json::from_value(json!("a b@x.com")).unwrap();
        assert_eq!(id.path_segment(), "a%20b%40x.com");
    }

    #[test]
    fn test_numeric_looking_string_stays_a_string() {
        let id: ContactIdentifier = serde_json::from_value(json!("42")).unwrap();
        assert_eq!(id, ContactIdentifier::Email("42".to_string()));
    }

    #[test]
    fn test_sender_name_defaults_to_local_part() {
        let sender = Sender::new("noreply@z.com", None);
        assert_eq!(sender.name, "noreply");
        assert_eq!(Sender::new("a@z.com", Some("Alice".into())).name, "Alice");
        assert_eq!(Sender::new("a@z.com", Some("  ".into())).name, "a");
    }

    #[test]
    fn test_email_options_validation() {
        let valid: EmailOptions = serde_json::from_value(json!({
            "to": [{"email": "x@y.com"}],
            "subject": "Hi",
            "htmlContent": "<p>hi</p>"
        }))
        .unwrap();
        assert!(valid.validate().is_ok());

        let no_recipients = EmailOptions {
            to: vec![],
            ..valid.clone()
        };
        assert!(no_recipients.validate().is_err());

        let bad_recipient = EmailOptions {
            to: vec![Recipient {
                email: "not-an-email".into(),
                name: None,
            }],
            ..valid.clone()
        };
        assert!(bad_recipient.validate().is_err());

        let bad_sender = EmailOptions {
            sender: Some(Sender {
                name: "x".into(),
                email: "nope".into(),
            }),
            ..valid
        };
        assert!(bad_sender.validate().is_err());
    }

    #[test]
    fn test_contact_update_skips_absent_fields() {
        let update = ContactUpdate {
            email_blacklisted: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"emailBlacklisted": true})
        );
        assert!(!update.is_empty());
        assert!(ContactUpdate::default().is_empty());
    }

    #[test]
    fn test_contact_keeps_unmodelled_fields() {
        let contact: Contact = serde_json::from_value(json!({
            "id": 42,
            "email": "a@b.com",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(contact.id, Some(42));
        assert_eq!(contact.extra["createdAt"], json!("2024-01-01T00:00:00Z"));
        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            json!({"id": 42, "email": "a@b.com", "createdAt": "2024-01-01T00:00:00Z"})
        );
    }

    #[test]
    fn test_attribute_type_default_is_text() {
        assert_eq!(AttributeType::default(), AttributeType::Text);
        assert_eq!(
            serde_json::from_value::<AttributeType>(json!("boolean")).unwrap(),
            AttributeType::Boolean
        );
        assert!(serde_json::from_value::<AttributeType>(json!("category")).is_err());
    }
}
