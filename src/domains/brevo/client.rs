//! Authenticated HTTP client for the Brevo v3 REST API.
//!
//! Every operation is a single request through [`BrevoClient::execute`], which
//! owns header construction, body serialization and HTTP error detection.
//! Nothing is retried or cached.

use std::time::Duration;

use reqwest::{
    Client, Method,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::error::{BrevoError, BrevoResult};
use super::types::{
    AttributeType, Contact, ContactAttribute, ContactIdentifier, ContactUpdate, EmailEvent,
    EmailOptions, EmailSendResult, Sender,
};
use crate::core::config::BrevoConfig;

/// Production Brevo API root.
pub const DEFAULT_BASE_URL: &str = "https://api.brevo.com/v3";

/// Header carrying the raw API key.
const API_KEY_HEADER: &str = "api-key";

const JSON: &str = "application/json";

/// Client bound to one base URL and one API key.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct BrevoClient {
    http: Client,
    base_url: String,
    api_key: String,
    default_sender: Option<Sender>,
    timeout_secs: u64,
}

impl std::fmt::Debug for BrevoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrevoClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("default_sender", &self.default_sender)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl BrevoClient {
    /// Build a client from configuration. Fails when no API key is configured.
    pub fn new(config: &BrevoConfig) -> BrevoResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| BrevoError::config("BREVO_API_KEY is not set"))?
            .to_string();

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BrevoError::config(format!("failed to create HTTP client: {e}")))?;

        let client = Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            default_sender: config.default_sender(),
            timeout_secs: config.timeout_secs,
        };

        info!(
            "Brevo client ready for {} (default sender: {})",
            client.base_url,
            client
                .default_sender
                .as_ref()
                .map_or("none", |s| s.email.as_str())
        );

        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_sender(&self) -> Option<&Sender> {
        self.default_sender.as_ref()
    }

    /// Send one request to `base_url + path`.
    ///
    /// Returns the parsed JSON body, or `Value::Null` for DELETE and for
    /// success responses without a body.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> BrevoResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Sending Brevo request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, JSON)
            .header(API_KEY_HEADER, self.api_key.as_str());

        if let Some(body) = body {
            let payload = serde_json::to_string(body)?;
            request = request.header(CONTENT_TYPE, JSON).body(payload);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Brevo returned {}", status);
            return Err(BrevoError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        if method == Method::DELETE {
            return Ok(Value::Null);
        }

        let text = response.text().await.map_err(|e| self.transport_error(e))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| BrevoError::malformed(format!("invalid JSON body ({e})")))
    }

    async fn get(&self, path: &str) -> BrevoResult<Value> {
        self.execute(Method::GET, path, None::<&Value>).await
    }

    fn transport_error(&self, err: reqwest::Error) -> BrevoError {
        if err.is_timeout() {
            BrevoError::Timeout(self.timeout_secs)
        } else {
            BrevoError::Http(err)
        }
    }

    // ========================================================================
    // Contacts
    // ========================================================================

    /// Fetch a contact by numeric ID or email.
    pub async fn get_contact(&self, identifier: &ContactIdentifier) -> BrevoResult<Contact> {
        let value = self.get(&contact_path(identifier)).await?;
        decode(value, "contact")
    }

    /// Apply a partial update to the contact with the given ID.
    pub async fn update_contact(&self, id: i64, update: &ContactUpdate) -> BrevoResult<()> {
        self.execute(Method::PUT, &format!("/contacts/{id}"), Some(update))
            .await?;
        Ok(())
    }

    /// Create a `normal` contact attribute.
    pub async fn create_attribute(&self, name: &str, attribute_type: AttributeType) -> BrevoResult<()> {
        let path = format!("/contacts/attributes/normal/{}", urlencoding::encode(name));
        let body = serde_json::json!({ "type": attribute_type });
        self.execute(Method::POST, &path, Some(&body)).await?;
        Ok(())
    }

    /// List every contact attribute defined on the account.
    pub async fn list_attributes(&self) -> BrevoResult<Vec<ContactAttribute>> {
        let value = self.get("/contacts/attributes").await?;
        let attributes = take_field(value, "attributes")?
            .ok_or_else(|| BrevoError::malformed("response has no 'attributes' field"))?;
        decode(attributes, "attributes")
    }

    // ========================================================================
    // Transactional email
    // ========================================================================

    /// Send a transactional email, filling in the default sender when none is given.
    pub async fn send_email(&self, options: EmailOptions) -> BrevoResult<EmailSendResult> {
        let payload = self.with_sender(options)?;
        let value = self
            .execute(Method::POST, "/smtp/email", Some(&payload))
            .await?;
        decode(value, "send result")
    }

    /// List delivery events, optionally filtered by message ID and/or recipient.
    pub async fn get_email_events(
        &self,
        message_id: Option<&str>,
        email: Option<&str>,
    ) -> BrevoResult<Vec<EmailEvent>> {
        let value = self.get(&events_path(message_id, email)?).await?;
        // Brevo answers `{}` when nothing matches.
        match take_field(value, "events")? {
            Some(events) => decode(events, "events"),
            None => Ok(Vec::new()),
        }
    }

    /// List the senders configured on the account, as returned by Brevo.
    pub async fn list_senders(&self) -> BrevoResult<Value> {
        self.get("/senders").await
    }

    fn with_sender(&self, options: EmailOptions) -> BrevoResult<EmailOptions> {
        if options.sender.is_some() {
            return Ok(options);
        }
        let sender = self.default_sender.clone().ok_or(BrevoError::MissingSender)?;
        Ok(EmailOptions {
            sender: Some(sender),
            ..options
        })
    }
}

/// Path addressing a contact: numeric IDs verbatim, anything else percent-encoded.
pub fn contact_path(identifier: &ContactIdentifier) -> String {
    format!("/contacts/{}", identifier.path_segment())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventFilter<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

/// Path for the email events report. Only supplied filters are appended,
/// `messageId` before `email`.
///
/// Values are form-encoded, so a space becomes `+` rather than `%20`; Brevo
/// decodes both the same way.
pub fn events_path(message_id: Option<&str>, email: Option<&str>) -> BrevoResult<String> {
    let filter = EventFilter {
        message_id: message_id.filter(|s| !s.is_empty()),
        email: email.filter(|s| !s.is_empty()),
    };
    let query = serde_urlencoded::to_string(&filter)?;

    let mut path = String::from("/smtp/statistics/events");
    if !query.is_empty() {
        path.push('?');
        path.push_str(&query);
    }
    Ok(path)
}

fn take_field(value: Value, field: &str) -> BrevoResult<Option<Value>> {
    match value {
        Value::Object(mut map) => Ok(map.remove(field)),
        other => Err(BrevoError::malformed(format!(
            "expected a JSON object with '{field}', got {other}"
        ))),
    }
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> BrevoResult<T> {
    serde_json::from_value(value).map_err(|e| BrevoError::malformed(format!("unexpected {what} shape ({e})")))
}
