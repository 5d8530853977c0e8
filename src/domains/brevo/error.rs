//! Brevo client error types.

use thiserror::Error;

/// Result type for Brevo API operations.
pub type BrevoResult<T> = Result<T, BrevoError>;

/// Errors raised by [`BrevoClient`](super::BrevoClient).
#[derive(Debug, Error)]
pub enum BrevoError {
    /// The client could not be built from its configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Brevo answered with a non-success status.
    #[error("Brevo API error: {status} {status_text} - {body}")]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Brevo answered with success but the body was not what the operation expects.
    #[error("Malformed response from Brevo: {0}")]
    MalformedResponse(String),

    /// No response arrived within the configured timeout.
    #[error("Brevo request timed out after {0}s")]
    Timeout(u64),

    /// The request never completed (DNS, TLS, connection reset, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A query string could not be encoded.
    #[error("Failed to encode query string: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// An email was sent without a sender and no default sender is configured.
    #[error("No sender given and no default sender configured (set BREVO_DEFAULT_SENDER_EMAIL)")]
    MissingSender,
}

impl BrevoError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new malformed-response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_status_and_body() {
        let err = BrevoError::Api {
            status: 404,
            status_text: "Not Found".to_string(),
            body: r#"{"code":"document_not_found"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Brevo API error: 404 Not Found - {"code":"document_not_found"}"#
        );
    }
}
