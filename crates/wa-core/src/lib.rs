//! wa-core: WhatsApp Gateway Core Library
//!
//! Shared configuration and error types for the wa-gateway workspace.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
