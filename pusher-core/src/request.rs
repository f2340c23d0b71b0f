//! Request construction
//!
//! Turns a logical operation into a [`SignedRequest`]: validated input, the
//! JSON body, and a URL whose query string carries the signature. Nothing
//! here touches the network, so every request can be inspected before it is
//! sent.

use crate::auth::{Credentials, QueryParams, SignedQuery};
use crate::error::{PusherError, PusherResult};
use crate::http::HttpMethod;
use crate::protocol::{serialize_data, BatchBody, BatchEntry, Event, TriggerBody};
use crate::push::{notify_path, NotifyBody, PushNotification};
use crate::validation::{
    validate_channel_name, validate_channels, validate_data, validate_push_notification,
    validate_socket_id,
};
use serde::Serialize;

/// A fully built request, ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Vec<u8>>,
}

impl SignedRequest {
    pub fn body_str(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|body| std::str::from_utf8(body).ok())
    }
}

/// Builds signed requests for one client configuration at one instant
pub struct RequestBuilder<'a> {
    credentials: &'a Credentials,
    host: &'a str,
    push_host: Option<&'a str>,
    secure: bool,
    timestamp: u64,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(credentials: &'a Credentials, host: &'a str, secure: bool, timestamp: u64) -> Self {
        Self {
            credentials,
            host,
            push_host: None,
            secure,
            timestamp,
        }
    }

    pub fn push_host(mut self, push_host: Option<&'a str>) -> Self {
        self.push_host = push_host;
        self
    }

    /// `POST /apps/{app_id}/events`
    pub fn trigger<S, D>(
        &self,
        channels: &[S],
        event: &str,
        data: &D,
        socket_id: Option<&str>,
    ) -> PusherResult<SignedRequest>
    where
        S: AsRef<str>,
        D: Serialize + ?Sized,
    {
        validate_channels(channels)?;
        if let Some(socket_id) = socket_id {
            validate_socket_id(socket_id)?;
        }
        let data = serialize_data(data)?;
        validate_data(&data)?;

        let body = TriggerBody {
            name: event,
            channels: channels.iter().map(|c| c.as_ref()).collect(),
            data,
            socket_id,
        };
        let path = format!("/apps/{}/events", self.credentials.app_id);
        self.post(self.host, &path, &body)
    }

    /// `POST /apps/{app_id}/batch_events`
    pub fn trigger_batch(&self, events: &[Event]) -> PusherResult<SignedRequest> {
        let batch = events
            .iter()
            .map(BatchEntry::from_event)
            .collect::<PusherResult<Vec<_>>>()?;

        let path = format!("/apps/{}/batch_events", self.credentials.app_id);
        self.post(self.host, &path, &BatchBody { batch })
    }

    /// `GET /apps/{app_id}/channels`
    pub fn channels(&self, params: &QueryParams) -> PusherResult<SignedRequest> {
        let path = format!("/apps/{}/channels", self.credentials.app_id);
        self.get(&path, params)
    }

    /// `GET /apps/{app_id}/channels/{channel}`
    pub fn channel(&self, channel: &str, params: &QueryParams) -> PusherResult<SignedRequest> {
        validate_channel_name(channel)?;
        let path = format!("/apps/{}/channels/{}", self.credentials.app_id, channel);
        self.get(&path, params)
    }

    /// `GET /apps/{app_id}/channels/{channel}/users`
    pub fn channel_users(&self, channel: &str) -> PusherResult<SignedRequest> {
        validate_channel_name(channel)?;
        let path = format!("/apps/{}/channels/{}/users", self.credentials.app_id, channel);
        self.get(&path, &QueryParams::new())
    }

    /// Notify request against the push notification host
    pub fn notify(
        &self,
        interests: &[String],
        notification: &PushNotification,
    ) -> PusherResult<SignedRequest> {
        let push_host = self.push_host.ok_or(PusherError::NoPushHostConfigured)?;
        validate_push_notification(interests, notification)?;

        let body = NotifyBody {
            interests,
            notification,
        };
        self.post(push_host, &notify_path(&self.credentials.app_id), &body)
    }

    fn get(&self, path: &str, params: &QueryParams) -> PusherResult<SignedRequest> {
        self.signed(HttpMethod::Get, self.host, path, params.clone(), None)
    }

    fn post<B: Serialize>(&self, host: &str, path: &str, body: &B) -> PusherResult<SignedRequest> {
        let body = serde_json::to_vec(body)
            .map_err(|e| PusherError::serialize("Failed to serialize request body", e))?;
        self.signed(HttpMethod::Post, host, path, QueryParams::new(), Some(body))
    }

    fn signed(
        &self,
        method: HttpMethod,
        host: &str,
        path: &str,
        params: QueryParams,
        body: Option<Vec<u8>>,
    ) -> PusherResult<SignedRequest> {
        let signed = self.credentials.signer().sign(
            method,
            path,
            params,
            body.as_deref(),
            self.timestamp,
        )?;

        Ok(SignedRequest {
            method,
            url: format!("{}://{}{}?{}", self.scheme(), host, path, wire_query(&signed)),
            body,
        })
    }

    fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }
}

/// Percent-encoded query string with `auth_signature` last
fn wire_query(signed: &SignedQuery) -> String {
    signed
        .wire_pairs()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
