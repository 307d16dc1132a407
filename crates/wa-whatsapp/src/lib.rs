//! wa-whatsapp: WhatsApp auto-reply bot via the Twilio API
//!
//! This crate provides the webhook server, intent classification and
//! canned-reply composition for the Clevrly WhatsApp assistant, plus the
//! outbound message sender.

pub mod intent;
pub mod reply;
pub mod signature;
pub mod twilio;
pub mod twiml;
pub mod webhook;

pub use intent::{classify, Intent};
pub use signature::SignatureValidator;
pub use twilio::TwilioClient;
pub use webhook::WebhookServer;

pub use wa_core::{Error, Result};
