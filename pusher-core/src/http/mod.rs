// 🟢 GREEN Phase: HTTP transport for the Pusher REST API
// One request per call, no retries

use crate::error::{PusherError, PusherResult};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;

pub use self::config::{HttpConfig, HttpConfigBuilder};
pub use self::response::{decode_ack, decode_json, RawResponse};

mod config;
mod response;

/// HTTP methods used by the Pusher REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Executes a single HTTP exchange.
///
/// Implementations return the raw status and body for every response that
/// arrives, successful or not. Only failures to obtain a response at all
/// (timeouts, refused connections, TLS errors) are reported as errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> PusherResult<RawResponse>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &HttpConfig) -> PusherResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| PusherError::transport("Failed to build HTTP client", e))?;

        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest::Client`
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> PusherResult<RawResponse> {
        let mut request = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> PusherError {
    let message = if e.is_timeout() {
        "Request timeout"
    } else if e.is_connect() {
        "Connection failed"
    } else {
        "Network error"
    };
    PusherError::transport(message, e)
}
