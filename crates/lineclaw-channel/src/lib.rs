//! LineClaw Channel - the LINE side of the conversation
//!
//! Normalizes inbound webhook events and assembles the reply and push
//! bodies an external HTTP sender transmits.

pub mod parse;
pub mod reply;
pub mod utils;

pub use parse::{parse_event, parse_webhook};
pub use reply::{Push, PushMessage, Reply, ReplyMessage, MAX_MESSAGES_PER_REQUEST};
pub use utils::{split_text, text_messages};
