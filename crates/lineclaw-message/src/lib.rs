//! `LineClaw` Message - validated builders for LINE message objects
//!
//! Turns "send a text" or "send a carousel of choices" into the exact JSON
//! payload the LINE Messaging API expects, rejecting malformed input before
//! it ever reaches the network.
//!
//! ## Variants
//!
//! - One-shot: [`Text`], [`Image`], [`Video`], [`Audio`], [`Location`], [`Sticker`]
//! - Append-based: [`ImageMap`], [`Button`], [`Confirm`], [`Carousel`]
//!
//! Append-based builders take `&mut self` and return `Result<&mut Self>`, so
//! calls chain with `?`. A failed append leaves the builder as it was.
//!
//! ```
//! use lineclaw_message::{Confirm, LineMessage, TemplateActions};
//!
//! # fn main() -> lineclaw_message::Result<()> {
//! let mut confirm = Confirm::new("Sure?", "alt")?;
//! confirm
//!     .add_message_action("Yes", "YES")?
//!     .add_message_action("No", "NO")?;
//! let payload = confirm.finalize()?;
//! assert_eq!(payload.kind(), "template");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code, missing_docs)]

pub mod action;
pub mod capped;
pub mod carousel;
pub mod error;
pub mod imagemap;
pub mod payload;
pub mod simple;
pub mod template;
pub mod validate;

pub use action::{Action, Area, ImagemapAction};
pub use capped::Capped;
pub use carousel::Carousel;
pub use error::{MessageError, Result};
pub use imagemap::ImageMap;
pub use payload::{BaseSize, Column, Payload, Template};
pub use simple::{Audio, Image, Location, Sticker, Text, Video};
pub use template::{Button, Confirm, TemplateActions};
pub use validate::{is_finite_number, is_url, Numeric};

/// Anything that can produce a finalized, serializable message object
///
/// One-shot variants never fail here. Append-based variants fail until their
/// required collection holds at least one item, and recompute the payload
/// from their current state on every call.
pub trait LineMessage {
    /// Produce the payload
    fn finalize(&self) -> Result<Payload>;

    /// Same as [`LineMessage::finalize`]
    fn get(&self) -> Result<Payload> {
        self.finalize()
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Action, Area, Audio, Button, Carousel, Confirm, Image, ImageMap, ImagemapAction,
        LineMessage, Location, MessageError, Payload, Sticker, TemplateActions, Text, Video,
    };
}
