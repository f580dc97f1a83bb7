//! Reply and push request bodies
//!
//! These are the JSON bodies an HTTP sender posts to the reply and push
//! endpoints. Building them never touches the network.

use lineclaw_message::{Capped, LineMessage, MessageError, Payload, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of messages in one reply or push request
pub const MAX_MESSAGES_PER_REQUEST: usize = 5;

/// Body of a reply request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessage {
    /// Token from the event being answered
    pub reply_token: String,
    /// Finalized messages, in send order
    pub messages: Vec<Payload>,
}

/// Body of a push request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessage {
    /// User, group or room ID
    pub to: String,
    /// Finalized messages, in send order
    pub messages: Vec<Payload>,
}

/// Collects up to five messages answering one reply token
#[derive(Debug, Clone)]
pub struct Reply {
    reply_token: String,
    messages: Capped<Payload>,
}

impl Reply {
    /// Empty reply; fails when the token is empty
    pub fn new(reply_token: &str) -> Result<Self> {
        if reply_token.is_empty() {
            return Err(MessageError::Required {
                field: "replyToken",
            });
        }

        Ok(Self {
            reply_token: reply_token.to_string(),
            messages: Capped::new(MAX_MESSAGES_PER_REQUEST, "message"),
        })
    }

    /// Finalize `message` and append it
    pub fn add<M: LineMessage + ?Sized>(&mut self, message: &M) -> Result<&mut Self> {
        self.messages.ensure_room()?;
        self.messages.push(message.finalize()?)?;
        Ok(self)
    }

    /// Number of messages added so far
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when nothing has been added
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Request body; needs at least one message
    pub fn finalize(&self) -> Result<ReplyMessage> {
        Ok(ReplyMessage {
            reply_token: self.reply_token.clone(),
            messages: self.messages.non_empty()?.to_vec(),
        })
    }
}

/// Collects up to five messages for a user, group or room
#[derive(Debug, Clone)]
pub struct Push {
    to: String,
    messages: Capped<Payload>,
}

impl Push {
    /// Empty push; fails when the recipient is empty
    pub fn new(to: &str) -> Result<Self> {
        if to.is_empty() {
            return Err(MessageError::Required { field: "to" });
        }

        Ok(Self {
            to: to.to_string(),
            messages: Capped::new(MAX_MESSAGES_PER_REQUEST, "message"),
        })
    }

    /// Finalize `message` and append it
    pub fn add<M: LineMessage + ?Sized>(&mut self, message: &M) -> Result<&mut Self> {
        self.messages.ensure_room()?;
        self.messages.push(message.finalize()?)?;
        Ok(self)
    }

    /// Request body; needs at least one message
    pub fn finalize(&self) -> Result<PushMessage> {
        Ok(PushMessage {
            to: self.to.clone(),
            messages: self.messages.non_empty()?.to_vec(),
        })
    }
}
