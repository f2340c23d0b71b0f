// Event types and the request bodies of the trigger endpoints

use crate::error::{PusherError, PusherResult};
use crate::validation::{validate_channel_name, validate_data, validate_socket_id};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a batch trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub channel: String,
    pub name: String,
    pub data: Value,
    /// Connection that should not receive the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<String>,
}

impl Event {
    pub fn new(channel: impl Into<String>, name: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            channel: channel.into(),
            name: name.into(),
            data: data.into(),
            socket_id: None,
        }
    }

    pub fn excluding(mut self, socket_id: impl Into<String>) -> Self {
        self.socket_id = Some(socket_id.into());
        self
    }
}

/// Body of `POST /apps/{app_id}/events`
#[derive(Debug, Serialize)]
pub struct TriggerBody<'a> {
    pub name: &'a str,
    pub channels: Vec<&'a str>,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<&'a str>,
}

/// Body of `POST /apps/{app_id}/batch_events`
#[derive(Debug, Serialize)]
pub struct BatchBody<'a> {
    pub batch: Vec<BatchEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct BatchEntry<'a> {
    pub channel: &'a str,
    pub name: &'a str,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<&'a str>,
}

impl<'a> BatchEntry<'a> {
    /// Validate an event and convert it to its wire form
    pub fn from_event(event: &'a Event) -> PusherResult<Self> {
        validate_channel_name(&event.channel)?;
        if let Some(socket_id) = &event.socket_id {
            validate_socket_id(socket_id)?;
        }
        let data = value_to_data(&event.data)?;
        validate_data(&data)?;

        Ok(Self {
            channel: &event.channel,
            name: &event.name,
            data,
            socket_id: event.socket_id.as_deref(),
        })
    }
}

/// Event data always travels as a JSON string. Strings are sent verbatim,
/// anything else is serialized first.
pub fn serialize_data<T: Serialize + ?Sized>(data: &T) -> PusherResult<String> {
    let value = serde_json::to_value(data)
        .map_err(|e| PusherError::serialize("Failed to serialize event data", e))?;
    value_to_data(&value)
}

fn value_to_data(value: &Value) -> PusherResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => serde_json::to_string(other)
            .map_err(|e| PusherError::serialize("Failed to serialize event data", e)),
    }
}
