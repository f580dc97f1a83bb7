use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Channel an inbound message arrived on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Line,
}

/// Inbound message normalized from a platform event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessage {
    /// Token for replying to this event, when the event carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    /// User, group or room ID
    pub sender: Option<String>,
    /// Message text, or postback data for postback events
    pub text: String,
    /// The event exactly as received
    pub original_request: Value,
    /// Set when `text` came from postback data
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub postback: bool,
    #[serde(rename = "type")]
    pub channel: Channel,
}

impl InboundMessage {
    /// True if this event can be answered with a reply
    pub fn can_reply(&self) -> bool {
        self.reply_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
