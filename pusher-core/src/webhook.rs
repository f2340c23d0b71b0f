// Webhooks sent by Pusher to the application

use crate::auth::signature::verify_hmac_sha256_hex;
use crate::auth::Credentials;
use crate::error::{PusherError, PusherResult};
use serde::{Deserialize, Serialize};

pub const KEY_HEADER: &str = "X-Pusher-Key";
pub const SIGNATURE_HEADER: &str = "X-Pusher-Signature";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub time_ms: i64,
    pub events: Vec<WebhookEvent>,
}

/// One event of a webhook. Which optional fields are set depends on `name`
/// (`channel_occupied`, `member_added`, `client_event`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub name: String,
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Check the webhook came from the service, then decode it
pub fn verify(
    credentials: &Credentials,
    key: &str,
    signature: &str,
    body: &[u8],
) -> PusherResult<Webhook> {
    if key != credentials.key {
        return Err(PusherError::webhook("key does not match this application"));
    }
    if !verify_hmac_sha256_hex(credentials.secret(), body, signature) {
        return Err(PusherError::webhook("signature mismatch"));
    }

    serde_json::from_slice(body)
        .map_err(|e| PusherError::decode(format!("Failed to parse webhook: {}", e), e))
}
