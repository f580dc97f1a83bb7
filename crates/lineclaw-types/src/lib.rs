//! LineClaw Types - Inbound wire types for the LINE webhook
//!
//! Raw webhook events and the normalized message the rest of the
//! application works with.

mod events;
mod message;

pub use events::{EventMessage, EventPostback, EventSource, WebhookBody, WebhookEvent};
pub use message::{Channel, InboundMessage};
