// Authentication module: request signing and channel subscription auth

pub mod clock;
pub mod signature;

pub use clock::{Clock, FixedClock, SystemClock};
pub use signature::{QueryParams, SignedQuery, Signer, AUTH_VERSION};

use crate::error::{PusherError, PusherResult};
use crate::validation::{validate_channel_name, validate_socket_id};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Application credentials. Immutable once a client is built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub key: String,
    secret: String,
}

impl Credentials {
    pub fn new(
        app_id: impl Into<String>,
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn signer(&self) -> Signer<'_> {
        Signer::new(&self.key, &self.secret)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("key", &self.key)
            .field("secret", &crate::logging::redact(&self.secret))
            .finish()
    }
}

/// Form body posted by a browser client when subscribing to an
/// authenticated channel
#[derive(Debug, Clone, Deserialize)]
pub struct AuthRequest {
    pub socket_id: String,
    pub channel_name: String,
}

impl AuthRequest {
    /// Parse an `application/x-www-form-urlencoded` body
    pub fn from_form(body: &[u8]) -> PusherResult<Self> {
        let request: AuthRequest = serde_urlencoded::from_bytes(body)
            .map_err(|e| PusherError::channel_auth(format!("malformed form body: {}", e)))?;
        validate_socket_id(&request.socket_id)?;
        validate_channel_name(&request.channel_name)?;
        Ok(request)
    }
}

/// Presence member announced to the other subscribers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberData {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Value>,
}

/// Response body returned to the subscribing browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAuth {
    pub auth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<String>,
}

impl ChannelAuth {
    pub fn to_json(&self) -> PusherResult<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| PusherError::serialize("Failed to serialize channel auth", e))
    }
}

pub fn authenticate_private(credentials: &Credentials, body: &[u8]) -> PusherResult<ChannelAuth> {
    let request = AuthRequest::from_form(body)?;
    let to_sign = format!("{}:{}", request.socket_id, request.channel_name);
    let signature = signature::hmac_sha256_hex(credentials.secret(), &to_sign)?;

    Ok(ChannelAuth {
        auth: format!("{}:{}", credentials.key, signature),
        channel_data: None,
    })
}

pub fn authenticate_presence(
    credentials: &Credentials,
    body: &[u8],
    member: &MemberData,
) -> PusherResult<ChannelAuth> {
    let request = AuthRequest::from_form(body)?;
    if member.user_id.is_empty() {
        return Err(PusherError::channel_auth("presence member must have a user_id"));
    }

    let channel_data = serde_json::to_string(member)
        .map_err(|e| PusherError::serialize("Failed to serialize member data", e))?;
    let to_sign = format!(
        "{}:{}:{}",
        request.socket_id, request.channel_name, channel_data
    );
    let signature = signature::hmac_sha256_hex(credentials.secret(), &to_sign)?;

    Ok(ChannelAuth {
        auth: format!("{}:{}", credentials.key, signature),
        channel_data: Some(channel_data),
    })
}
