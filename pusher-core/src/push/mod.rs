// 🟢 GREEN Phase: Push notifications to interest groups
// Sent to the push notification host, not the main API host

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path of the notify endpoint on the push notification host
pub fn notify_path(app_id: &str) -> String {
    format!("/server_api/v1/apps/{}/notifications", app_id)
}

/// A notification with one payload per target platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_level: Option<WebhookLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcm: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcm: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookLevel {
    Info,
    Debug,
}

impl PushNotification {
    pub fn builder() -> PushNotificationBuilder {
        PushNotificationBuilder::default()
    }

    /// True if at least one platform payload carries content
    pub fn has_platform_payload(&self) -> bool {
        [&self.apns, &self.gcm, &self.fcm]
            .into_iter()
            .flatten()
            .any(|payload| !is_empty_payload(payload))
    }
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

#[derive(Default)]
pub struct PushNotificationBuilder {
    notification: PushNotification,
}

impl PushNotificationBuilder {
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.notification.webhook_url = Some(url.into());
        self
    }

    pub fn webhook_level(mut self, level: WebhookLevel) -> Self {
        self.notification.webhook_level = Some(level);
        self
    }

    pub fn apns(mut self, payload: Value) -> Self {
        self.notification.apns = Some(payload);
        self
    }

    pub fn gcm(mut self, payload: Value) -> Self {
        self.notification.gcm = Some(payload);
        self
    }

    pub fn fcm(mut self, payload: Value) -> Self {
        self.notification.fcm = Some(payload);
        self
    }

    pub fn build(self) -> PushNotification {
        self.notification
    }
}

/// Body of the notify endpoint
#[derive(Debug, Serialize)]
pub struct NotifyBody<'a> {
    pub interests: &'a [String],
    #[serde(flatten)]
    pub notification: &'a PushNotification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyResponse {
    #[serde(rename = "number_of_subscribers")]
    pub num_subscribers: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn requires_a_non_empty_platform_payload() {
        let webhook_only = PushNotification::builder().webhook_url("testURL").build();
        assert!(!webhook_only.has_platform_payload());

        let empty_gcm = PushNotification::builder().gcm(json!({})).build();
        assert!(!empty_gcm.has_platform_payload());

        let gcm = PushNotification::builder()
            .gcm(json!({"notification": {"title": "hello"}}))
            .build();
        assert!(gcm.has_platform_payload());
    }

    #[test]
    fn notify_body_flattens_the_notification() {
        let notification = PushNotification::builder()
            .webhook_url("testURL")
            .webhook_level(WebhookLevel::Debug)
            .gcm(json!("hello"))
            .build();
        let interests = vec!["testInterest".to_string()];
        let body = NotifyBody {
            interests: &interests,
            notification: &notification,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "interests": ["testInterest"],
                "webhook_url": "testURL",
                "webhook_level": "DEBUG",
                "gcm": "hello"
            })
        );
    }
}
