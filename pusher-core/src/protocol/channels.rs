// Channel query results

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response of `GET /apps/{app_id}/channels`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelsList {
    #[serde(default)]
    pub channels: HashMap<String, ChannelListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelListItem {
    /// Present only for presence channels queried with `info=user_count`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u32>,
}

/// Response of `GET /apps/{app_id}/channels/{channel}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Not part of the response body; filled in from the request.
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub occupied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_count: Option<u32>,
}

/// Response of `GET /apps/{app_id}/channels/{channel}/users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Users {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}
