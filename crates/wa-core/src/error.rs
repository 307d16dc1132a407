//! Error types for wa-core

use thiserror::Error;

/// Main error type for the wa-gateway workspace
#[derive(Error, Debug)]
pub enum Error {
    #[error("Webhook signature verification failed")]
    Signature,

    #[error("Missing required field(s): {0}")]
    MissingFields(String),

    #[error("Twilio API error: {0}")]
    Gateway(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Internal(String),
}

/// Result type alias for wa-core
pub type Result<T> = std::result::Result<T, Error>;
