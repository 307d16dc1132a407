//! Configuration management
//!
//! All settings come from environment variables, loaded once at process
//! start into an immutable [`Config`] that is passed into constructors.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration for wa-gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Twilio account SID
    pub account_sid: String,

    /// Twilio auth token (also the webhook signing key)
    #[serde(skip_serializing)]
    pub auth_token: String,

    /// Whether to verify the X-Twilio-Signature header on inbound webhooks
    #[serde(default)]
    pub validate_webhooks: bool,

    /// Default outbound sender identity, e.g. "whatsapp:+14155238886"
    #[serde(default = "default_whatsapp_from")]
    pub whatsapp_from: String,

    /// Base URL used to reconstruct the canonical webhook URL for signing
    pub base_url: String,

    /// HTTP listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout for outbound Twilio API calls, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_whatsapp_from() -> String {
    "whatsapp:+14155238886".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    10
}

fn required(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::Config(format!("Missing env var: {}", name)))
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let account_sid = required("TWILIO_ACCOUNT_SID")?;
        let auth_token = required("TWILIO_AUTH_TOKEN")?;

        let validate_webhooks = std::env::var("TWILIO_VALIDATE_WEBHOOKS")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);

        let base_url = std::env::var("BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));

        let timeout_secs = std::env::var("TWILIO_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        Ok(Config {
            account_sid,
            auth_token,
            validate_webhooks,
            whatsapp_from: std::env::var("TWILIO_WHATSAPP_FROM")
                .unwrap_or_else(|_| default_whatsapp_from()),
            base_url,
            port,
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(default_port(), 3000);
        assert_eq!(default_timeout_secs(), 10);
        assert_eq!(default_whatsapp_from(), "whatsapp:+14155238886");
    }

    #[test]
    fn test_from_env() {
        // Single test mutating the environment to avoid races between
        // parallel test threads.
        unsafe {
            std::env::remove_var("TWILIO_ACCOUNT_SID");
            std::env::remove_var("TWILIO_AUTH_TOKEN");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            std::env::set_var("TWILIO_ACCOUNT_SID", "AC123");
            std::env::set_var("TWILIO_AUTH_TOKEN", "token123");
            std::env::set_var("TWILIO_VALIDATE_WEBHOOKS", "TRUE");
            std::env::set_var("PORT", "8080");
            std::env::remove_var("BASE_URL");
            std::env::remove_var("TWILIO_WHATSAPP_FROM");
            std::env::remove_var("TWILIO_TIMEOUT_SECS");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.account_sid, "AC123");
        assert_eq!(config.auth_token, "token123");
        assert!(config.validate_webhooks);
        assert_eq!(config.port, 8080);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.whatsapp_from, "whatsapp:+14155238886");
        assert_eq!(config.timeout_secs, 10);

        unsafe {
            std::env::remove_var("TWILIO_ACCOUNT_SID");
            std::env::remove_var("TWILIO_AUTH_TOKEN");
            std::env::remove_var("TWILIO_VALIDATE_WEBHOOKS");
            std::env::remove_var("PORT");
        }
    }
}
