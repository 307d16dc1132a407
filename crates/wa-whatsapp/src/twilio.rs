//! Twilio API client for WhatsApp

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use wa_core::{Config, Error, Result};

/// Twilio API client
#[derive(Debug, Clone)]
pub struct TwilioClient {
    client: Client,
    account_sid: String,
    auth_token: String,
    whatsapp_from: String,
    base_url: String,
}

/// Outgoing message payload (Twilio Messages API form fields)
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendMessagePayload {
    from: String,
    to: String,
    body: String,
}

impl TwilioClient {
    /// Create a new Twilio client from configuration.
    ///
    /// The underlying HTTP client carries the configured request timeout
    /// so an unresponsive gateway cannot hang a handler indefinitely.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            whatsapp_from: config.whatsapp_from.clone(),
            base_url: "https://api.twilio.com".to_string(),
        })
    }

    /// Send a WhatsApp message and return the gateway-issued message SID.
    ///
    /// `from` overrides the configured default sender identity.
    pub async fn send_message(&self, to: &str, body: &str, from: Option<&str>) -> Result<String> {
        info!("Sending WhatsApp message to {}", to);

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );

        let payload = SendMessagePayload {
            from: from.unwrap_or(&self.whatsapp_from).to_string(),
            to: to.to_string(),
            body: body.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Gateway(format!(
                "Failed to send message: {} - {}",
                status, text
            )));
        }

        #[derive(Deserialize)]
        struct SendMessageResponse {
            sid: String,
        }

        let result: SendMessageResponse = response.json().await?;
        Ok(result.sid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use serde_json::json;

    fn test_config() -> Config {
        Config {
            account_sid: "AC123".to_string(),
            auth_token: "token123".to_string(),
            validate_webhooks: false,
            whatsapp_from: "whatsapp:+14155238886".to_string(),
            base_url: "http://localhost:3000".to_string(),
            port: 3000,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_client_creation() {
        let client = TwilioClient::new(&test_config()).unwrap();
        assert_eq!(client.account_sid, "AC123");
        assert_eq!(client.base_url, "https://api.twilio.com");
    }

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_send_message_returns_gateway_sid() {
        let stub = Router::new().route(
            "/2010-04-01/Accounts/{sid}/Messages.json",
            post(|| async { Json(json!({"sid": "SM123"})) }),
        );

        let mut client = TwilioClient::new(&test_config()).unwrap();
        client.base_url = spawn_stub(stub).await;

        let sid = client
            .send_message("whatsapp:+15551234567", "hello", None)
            .await
            .unwrap();
        assert_eq!(sid, "SM123");
    }

    #[tokio::test]
    async fn test_send_message_gateway_failure() {
        let stub = Router::new().route(
            "/2010-04-01/Accounts/{sid}/Messages.json",
            post(|| async {
                (
                    axum::http::StatusCode::UNAUTHORIZED,
                    Json(json!({"code": 20003, "message": "Authenticate"})),
                )
            }),
        );

        let mut client = TwilioClient::new(&test_config()).unwrap();
        client.base_url = spawn_stub(stub).await;

        let err = client
            .send_message("whatsapp:+15551234567", "hello", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Gateway(_)));
    }
}
