//! wa-gateway: WhatsApp Auto-Reply Gateway Main Binary
//!
//! Starts the webhook server that answers inbound WhatsApp messages and
//! accepts outbound send requests.

use tracing_subscriber::EnvFilter;

use wa_core::Config;
use wa_whatsapp::WebhookServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting wa-gateway...");
    tracing::info!(
        "Webhook signature validation: {}",
        if config.validate_webhooks { "enabled" } else { "disabled" }
    );

    let server = WebhookServer::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to create webhook server: {}", e))?;

    server.start().await?;

    Ok(())
}
