// Builder for clients with explicit configuration

use super::{Client, DEFAULT_HOST};
use crate::auth::{Clock, Credentials, SystemClock};
use crate::error::{PusherError, PusherResult};
use crate::http::{HttpConfig, ReqwestTransport, Transport};
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`Client`]
#[derive(Default)]
pub struct ClientBuilder {
    app_id: Option<String>,
    key: Option<String>,
    secret: Option<String>,
    host: Option<String>,
    cluster: Option<String>,
    push_host: Option<String>,
    secure: bool,
    http_config: HttpConfig,
    transport: Option<Arc<dyn Transport>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ClientBuilder {
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// API host, optionally with a port. Takes precedence over `cluster`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Shorthand for the host `api-{cluster}.pusher.com`
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    pub fn push_host(mut self, push_host: impl Into<String>) -> Self {
        self.push_host = Some(push_host.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = timeout;
        self
    }

    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Replace the default `reqwest` transport. Timeouts configured on this
    /// builder are then ignored.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn build(self) -> PusherResult<Client> {
        let app_id = required(self.app_id, "app_id")?;
        let key = required(self.key, "key")?;
        let secret = required(self.secret, "secret")?;

        let host = match (self.host, self.cluster) {
            (Some(host), _) if !host.is_empty() => host,
            (_, Some(cluster)) if !cluster.is_empty() => format!("api-{}.pusher.com", cluster),
            _ => DEFAULT_HOST.to_string(),
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.http_config)?),
        };

        Ok(Client {
            credentials: Credentials::new(app_id, key, secret),
            host,
            push_host: self.push_host.filter(|h| !h.is_empty()),
            secure: self.secure,
            transport,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        })
    }
}

fn required(value: Option<String>, name: &str) -> PusherResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| PusherError::config(format!("{} is required", name)))
}
