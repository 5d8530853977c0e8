//! Configuration management for the MCP server.
//!
//! Configuration starts from defaults and is overridden by environment
//! variables. A `.env` file in the working directory is loaded first when
//! present.

use super::transport::TransportConfig;
use crate::domains::brevo::{DEFAULT_BASE_URL, Sender};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default upstream request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Brevo API access.
    pub brevo: BrevoConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Brevo API access configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct BrevoConfig {
    /// API key sent in the `api-key` header. Required to make any call.
    pub api_key: Option<String>,

    /// API root, without trailing slash.
    pub base_url: String,

    /// Sender address used when an email does not name one.
    pub default_sender_email: Option<String>,

    /// Display name for the default sender. Defaults to the address' local part.
    pub default_sender_name: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for BrevoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrevoConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("default_sender_email", &self.default_sender_email)
            .field("default_sender_name", &self.default_sender_name)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for BrevoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_sender_email: None,
            default_sender_name: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BrevoConfig {
    /// Whether a non-blank API key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// The default sender identity, if a sender address is configured.
    pub fn default_sender(&self) -> Option<Sender> {
        self.default_sender_email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(|email| Sender::new(email, self.default_sender_name.clone()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "brevo-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            brevo: BrevoConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log level from `MCP_LOG_LEVEL` (or `.env`), defaulting to `info`.
    ///
    /// Read on its own so logging can be initialised before the rest of the
    /// configuration is loaded.
    pub fn log_level_from_env() -> String {
        dotenvy::dotenv().ok();
        std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_TRANSPORT`), Brevo settings the `BREVO_` prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging.level = Self::log_level_from_env();

        config.transport = TransportConfig::from_env();
        config.brevo = BrevoConfig::from_env();

        config
    }
}

impl BrevoConfig {
    /// Load Brevo settings from `BREVO_*` environment variables.
    pub fn from_env() -> Self {
        let mut brevo = Self::default();

        brevo.api_key = std::env::var("BREVO_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        if brevo.api_key.is_some() {
            info!("Brevo API key loaded from environment");
        }

        if let Ok(base_url) = std::env::var("BREVO_API_BASE_URL") {
            brevo.base_url = base_url;
        }

        brevo.default_sender_email = std::env::var("BREVO_DEFAULT_SENDER_EMAIL").ok();
        brevo.default_sender_name = std::env::var("BREVO_DEFAULT_SENDER_NAME").ok();
        if brevo.default_sender_email.is_none() {
            warn!(
                "BREVO_DEFAULT_SENDER_EMAIL not set - send_email calls must name a sender explicitly"
            );
        }

        if let Ok(timeout) = std::env::var("BREVO_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) if secs > 0 => brevo.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid BREVO_TIMEOUT_SECS={:?}, using {}s",
                    timeout, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        brevo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const BREVO_VARS: [&str; 5] = [
        "BREVO_API_KEY",
        "BREVO_API_BASE_URL",
        "BREVO_DEFAULT_SENDER_EMAIL",
        "BREVO_DEFAULT_SENDER_NAME",
        "BREVO_TIMEOUT_SECS",
    ];

    fn clear_brevo_env() {
        for var in BREVO_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_brevo_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_brevo_env();
        unsafe {
            std::env::set_var("BREVO_API_KEY", "test_key_12345");
            std::env::set_var("BREVO_DEFAULT_SENDER_EMAIL", "hello@example.com");
            std::env::set_var("BREVO_TIMEOUT_SECS", "5");
        }
        let brevo = BrevoConfig::from_env();
        assert_eq!(brevo.api_key.as_deref(), Some("test_key_12345"));
        assert_eq!(brevo.timeout_secs, 5);
        assert_eq!(brevo.base_url, DEFAULT_BASE_URL);
        let sender = brevo.default_sender().unwrap();
        assert_eq!(sender.email, "hello@example.com");
        assert_eq!(sender.name, "hello");
        clear_brevo_env();
    }

    #[test]
    fn test_log_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
        assert_eq!(Config::log_level_from_env(), "info");

        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        assert_eq!(Config::log_level_from_env(), "debug");
        assert_eq!(Config::from_env().logging.level, "debug");
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }

    #[test]
    fn test_brevo_blank_key_is_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_brevo_env();
        unsafe {
            std::env::set_var("BREVO_API_KEY", "  ");
        }
        let brevo = BrevoConfig::from_env();
        assert!(brevo.api_key.is_none());
        assert!(!brevo.has_api_key());
        clear_brevo_env();
    }

    #[test]
    fn test_brevo_invalid_timeout_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_brevo_env();
        unsafe {
            std::env::set_var("BREVO_TIMEOUT_SECS", "soon");
        }
        assert_eq!(BrevoConfig::from_env().timeout_secs, DEFAULT_TIMEOUT_SECS);
        clear_brevo_env();
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let brevo = BrevoConfig {
            api_key: Some("super_secret_key".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", brevo);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_default_sender_uses_configured_name() {
        let brevo = BrevoConfig {
            default_sender_email: Some("team@example.com".to_string()),
            default_sender_name: Some("The Team".to_string()),
            ..Default::default()
        };
        assert_eq!(
            brevo.default_sender(),
            Some(Sender {
                name: "The Team".to_string(),
                email: "team@example.com".to_string()
            })
        );
        assert!(BrevoConfig::default().default_sender().is_none());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.name, "brevo-mcp");
        assert!(config.brevo.api_key.is_none());
        assert_eq!(config.brevo.timeout_secs, 30);
    }
}
