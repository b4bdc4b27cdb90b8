//! Notification messages
//!
//! A [`Message`] serializes to the shape accepted by topic-based push
//! messaging: `{notification: {title, body}, data: {...}, topic}`.

use serde::{Deserialize, Serialize};

/// A push notification addressed to a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub notification: Notification,
    pub data: MessageData,
    pub topic: String,
}

/// Visible part of the notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Data payload delivered alongside the notification
///
/// All values are strings; `city` is only present on city-level messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    pub name: String,
    pub province: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    pub date: String,
}

impl Message {
    /// Whether this message targets a city rather than a whole province
    pub fn is_city_message(&self) -> bool {
        self.data.city.is_some()
    }
}
