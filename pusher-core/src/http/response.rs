// Response decoding and error mapping

use crate::error::{PusherError, PusherResult};
use serde::de::{DeserializeOwned, IgnoredAny};

/// Status and body exactly as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, invalid UTF-8 replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    fn into_success(self) -> PusherResult<Vec<u8>> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(PusherError::api(self.status, self.text()))
        }
    }
}

/// Decode a 2xx JSON body into `T`, or map the status to an API error.
pub fn decode_json<T: DeserializeOwned>(response: RawResponse) -> PusherResult<T> {
    let body = response.into_success()?;
    serde_json::from_slice(&body)
        .map_err(|e| PusherError::decode(format!("Failed to parse response: {}", e), e))
}

/// Check a 2xx acknowledgement. An empty body is accepted; anything else
/// must still be well-formed JSON.
pub fn decode_ack(response: RawResponse) -> PusherResult<()> {
    let body = response.into_success()?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }
    serde_json::from_slice::<IgnoredAny>(&body)
        .map(|_| ())
        .map_err(|e| PusherError::decode(format!("Failed to parse response: {}", e), e))
}
