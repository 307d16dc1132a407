//! Webhook server
//!
//! Hosts the three HTTP endpoints: the Twilio webhook for inbound
//! WhatsApp messages, the outbound send endpoint, and the health probe.
//! Each request is an independent run of validate -> classify -> compose
//! -> encode (or validate -> send); no state survives the response.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Form, OriginalUri, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use wa_core::{Config, Error, Result};

use crate::signature::SignatureValidator;
use crate::twilio::TwilioClient;
use crate::{intent, reply, twiml};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub twilio_client: Arc<TwilioClient>,
    pub validator: SignatureValidator,
}

/// Webhook server
pub struct WebhookServer {
    addr: SocketAddr,
    state: AppState,
}

impl WebhookServer {
    /// Create a new webhook server from configuration
    pub fn new(config: Config) -> Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let twilio_client = Arc::new(TwilioClient::new(&config)?);
        let validator =
            SignatureValidator::new(config.validate_webhooks, config.auth_token.clone());

        let state = AppState {
            config,
            twilio_client,
            validator,
        };

        Ok(Self { addr, state })
    }

    /// Start the webhook server
    pub async fn start(self) -> Result<()> {
        info!("Starting WhatsApp webhook server on {}", self.addr);

        let app = routes()
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| Error::Config(e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| Error::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Create the router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/send", post(handle_send))
        .route("/healthz", get(healthz))
}

// ============================================================================
// Request/Response types
// ============================================================================

/// Outbound send request payload
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
}

/// Outbound send response payload
#[derive(Debug, Serialize)]
pub struct SendResponse {
    /// Gateway-issued message SID
    pub id: String,
}

/// Generic API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handler functions
// ============================================================================

/// Health check endpoint
async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// Handle an inbound WhatsApp message from the Twilio webhook.
///
/// All failure paths resolve to a status code here; nothing in this
/// sequence can take the listener down.
async fn handle_webhook(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Form(params): Form<Vec<(String, String)>>,
) -> Response {
    let url = canonical_url(&state.config.base_url, &uri);
    let signature = headers
        .get("x-twilio-signature")
        .and_then(|value| value.to_str().ok());

    if !state.validator.validate(&url, &params, signature) {
        warn!(endpoint = "/webhook", "Rejected webhook: invalid signature");
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }

    let from = field(&params, "From");
    let to = field(&params, "To");
    let body = field(&params, "Body");
    info!(from, to, body, "Received WhatsApp message");

    let reply_text = reply::compose(intent::classify(body));
    let envelope = twiml::message_response(&reply_text);

    ([(header::CONTENT_TYPE, twiml::CONTENT_TYPE)], envelope).into_response()
}

/// Handle an outbound send request.
///
/// Validation and the gateway call return error variants; the single
/// mapping to a status code happens here.
async fn handle_send(
    State(state): State<AppState>,
    Json(req): Json<SendRequest>,
) -> std::result::Result<Json<SendResponse>, (StatusCode, Json<ErrorResponse>)> {
    match send_outbound(&state, req).await {
        Ok(id) => Ok(Json(SendResponse { id })),
        Err(Error::MissingFields(fields)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("missing required field(s): {}", fields),
            }),
        )),
        Err(e) => {
            // Gateway internals stay server-side; the caller gets a
            // generic message.
            error!(endpoint = "/send", error = %e, "Failed to send message");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "failed to send".to_string(),
                }),
            ))
        }
    }
}

async fn send_outbound(state: &AppState, req: SendRequest) -> Result<String> {
    let to = req.to.unwrap_or_default();
    let message = req.message.unwrap_or_default();

    let mut missing = Vec::new();
    if to.trim().is_empty() {
        missing.push("to");
    }
    if message.trim().is_empty() {
        missing.push("message");
    }
    if !missing.is_empty() {
        return Err(Error::MissingFields(missing.join(", ")));
    }

    state
        .twilio_client
        .send_message(&to, &message, req.from.as_deref())
        .await
}

/// Reconstruct the canonical request URL used for signature verification
fn canonical_url(base_url: &str, uri: &Uri) -> String {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn field<'a>(params: &'a [(String, String)], name: &str) -> &'a str {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}
