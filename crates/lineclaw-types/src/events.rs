use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decode a field, falling back to its default when the shape doesn't match
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Webhook request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookBody {
    /// Bot user ID the events were sent to
    #[serde(default)]
    pub destination: Option<String>,
    /// Raw events, kept as JSON so they can be echoed back untouched
    #[serde(default)]
    pub events: Vec<Value>,
}

/// Where an event came from (user, group or room)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub source_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub group_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub room_id: Option<String>,
}

impl EventSource {
    /// Sender ID: user, then group, then room
    pub fn sender(&self) -> Option<&str> {
        [&self.user_id, &self.group_id, &self.room_id]
            .into_iter()
            .filter_map(|id| id.as_deref())
            .find(|id| !id.is_empty())
    }
}

/// Message attached to a `message` event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventMessage {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub message_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

/// Postback attached to a `postback` event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPostback {
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<String>,
}

/// A single webhook event
///
/// Every field is optional and a field of the wrong shape decodes as absent,
/// so unknown or partial events still deserialize; callers decide what is
/// required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub reply_token: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<EventSource>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<EventMessage>,
    #[serde(default, deserialize_with = "lenient")]
    pub postback: Option<EventPostback>,
}
