//! One-shot message variants
//!
//! Every field is validated in the constructor, so a value of any of these
//! types always holds a complete payload.

use crate::error::{MessageError, Result};
use crate::payload::Payload;
use crate::validate::{require_number, require_text, require_url, Numeric};
use crate::LineMessage;

/// Maximum text message length
pub const MAX_TEXT_LENGTH: usize = 2000;
/// Maximum location title and address length
pub const MAX_LOCATION_FIELD_LENGTH: usize = 100;

macro_rules! complete_message {
    ($name:ident) => {
        impl $name {
            /// Take the payload out of the message
            pub fn into_payload(self) -> Payload {
                self.payload
            }
        }

        impl LineMessage for $name {
            fn finalize(&self) -> Result<Payload> {
                Ok(self.payload.clone())
            }
        }
    };
}

/// Plain text message
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    payload: Payload,
}

impl Text {
    /// 1 to 2000 characters of text
    pub fn new(text: &str) -> Result<Self> {
        require_text("text", text, MAX_TEXT_LENGTH)?;

        Ok(Self {
            payload: Payload::Text {
                text: text.to_string(),
            },
        })
    }
}

/// Image message
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    payload: Payload,
}

impl Image {
    /// The preview defaults to the original image when not given
    pub fn new(original_content_url: &str, preview_image_url: Option<&str>) -> Result<Self> {
        require_url("originalContentUrl", original_content_url)?;
        let preview_image_url = match preview_image_url.filter(|url| !url.is_empty()) {
            Some(url) => {
                require_url("previewImageUrl", url)?;
                url
            }
            None => original_content_url,
        };

        Ok(Self {
            payload: Payload::Image {
                original_content_url: original_content_url.to_string(),
                preview_image_url: preview_image_url.to_string(),
            },
        })
    }
}

/// Video message
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    payload: Payload,
}

impl Video {
    /// Both the video and its preview image are required
    pub fn new(original_content_url: &str, preview_image_url: &str) -> Result<Self> {
        require_url("originalContentUrl", original_content_url)?;
        require_url("previewImageUrl", preview_image_url)?;

        Ok(Self {
            payload: Payload::Video {
                original_content_url: original_content_url.to_string(),
                preview_image_url: preview_image_url.to_string(),
            },
        })
    }
}

/// Audio message
#[derive(Debug, Clone, PartialEq)]
pub struct Audio {
    payload: Payload,
}

impl Audio {
    /// `duration` is in milliseconds; numeric strings are accepted
    pub fn new(original_content_url: &str, duration: impl Into<Numeric>) -> Result<Self> {
        require_url("originalContentUrl", original_content_url)?;
        let duration = duration.into();
        require_number("duration", &duration)?;

        Ok(Self {
            payload: Payload::Audio {
                original_content_url: original_content_url.to_string(),
                duration,
            },
        })
    }
}

/// Location message
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    payload: Payload,
}

impl Location {
    /// Title and address are capped at 100 characters each
    pub fn new(
        title: &str,
        address: &str,
        latitude: impl Into<Numeric>,
        longitude: impl Into<Numeric>,
    ) -> Result<Self> {
        require_text("title", title, MAX_LOCATION_FIELD_LENGTH)?;
        require_text("address", address, MAX_LOCATION_FIELD_LENGTH)?;
        let latitude = latitude.into();
        require_number("latitude", &latitude)?;
        let longitude = longitude.into();
        require_number("longitude", &longitude)?;

        Ok(Self {
            payload: Payload::Location {
                title: title.to_string(),
                address: address.to_string(),
                latitude,
                longitude,
            },
        })
    }
}

/// Sticker message
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    payload: Payload,
}

impl Sticker {
    /// Package and sticker identifiers, both non-empty
    pub fn new(package_id: &str, sticker_id: &str) -> Result<Self> {
        if package_id.is_empty() {
            return Err(MessageError::Required { field: "packageId" });
        }
        if sticker_id.is_empty() {
            return Err(MessageError::Required { field: "stickerId" });
        }

        Ok(Self {
            payload: Payload::Sticker {
                package_id: package_id.to_string(),
                sticker_id: sticker_id.to_string(),
            },
        })
    }
}

complete_message!(Text);
complete_message!(Image);
complete_message!(Video);
complete_message!(Audio);
complete_message!(Location);
complete_message!(Sticker);
