//! Wire shapes of finalized message objects
//!
//! Field names and nesting follow the platform's message object schema
//! exactly; optional fields are omitted rather than sent as `null`.

use crate::action::{Action, ImagemapAction};
use crate::validate::Numeric;
use serde::{Deserialize, Serialize};

/// A finalized message object, ready to be serialized and sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Payload {
    /// Plain text
    Text {
        /// Message body
        text: String,
    },
    /// Image with a preview
    #[serde(rename_all = "camelCase")]
    Image {
        /// Full-size image URL
        original_content_url: String,
        /// Preview image URL
        preview_image_url: String,
    },
    /// Video with a preview image
    #[serde(rename_all = "camelCase")]
    Video {
        /// Video file URL
        original_content_url: String,
        /// Preview image URL
        preview_image_url: String,
    },
    /// Audio clip
    #[serde(rename_all = "camelCase")]
    Audio {
        /// Audio file URL
        original_content_url: String,
        /// Length in milliseconds
        duration: Numeric,
    },
    /// A point on the map
    Location {
        /// Place name
        title: String,
        /// Street address
        address: String,
        /// Latitude
        latitude: Numeric,
        /// Longitude
        longitude: Numeric,
    },
    /// Sticker from a sticker package
    #[serde(rename_all = "camelCase")]
    Sticker {
        /// Package identifier
        package_id: String,
        /// Sticker identifier
        sticker_id: String,
    },
    /// Image with tappable areas
    #[serde(rename_all = "camelCase")]
    Imagemap {
        /// Base URL of the image, without size suffix
        base_url: String,
        /// Shown where the image cannot be rendered
        alt_text: String,
        /// Size the action areas are measured against
        base_size: BaseSize,
        /// Tap actions
        actions: Vec<ImagemapAction>,
    },
    /// Buttons, confirm or carousel template
    #[serde(rename_all = "camelCase")]
    Template {
        /// Shown where templates are not supported
        alt_text: String,
        /// Template body
        template: Template,
    },
}

impl Payload {
    /// The `type` discriminator as sent on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
            Self::Audio { .. } => "audio",
            Self::Location { .. } => "location",
            Self::Sticker { .. } => "sticker",
            Self::Imagemap { .. } => "imagemap",
            Self::Template { .. } => "template",
        }
    }
}

/// Imagemap base size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSize {
    /// Height in pixels
    pub height: Numeric,
    /// Width in pixels
    pub width: Numeric,
}

/// Body of a template message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Template {
    /// Text with up to four buttons, optionally a title and thumbnail
    #[serde(rename_all = "camelCase")]
    Buttons {
        /// Message text
        text: String,
        /// Optional title
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        /// Optional thumbnail image
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thumbnail_image_url: Option<String>,
        /// Buttons
        actions: Vec<Action>,
    },
    /// Question with two buttons
    Confirm {
        /// Question text
        text: String,
        /// Exactly two buttons
        actions: Vec<Action>,
    },
    /// Horizontally scrolling columns
    Carousel {
        /// Columns in display order
        columns: Vec<Column>,
    },
}

/// One column of a carousel template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column text
    pub text: String,
    /// Optional title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional thumbnail image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image_url: Option<String>,
    /// Buttons
    pub actions: Vec<Action>,
}

impl Column {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            title: None,
            thumbnail_image_url: None,
            actions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_kind_matches_tag() {
        let payload = Payload::Sticker {
            package_id: "1".to_string(),
            sticker_id: "2".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], payload.kind());
        assert_eq!(value, json!({"type": "sticker", "packageId": "1", "stickerId": "2"}));
    }

    #[test]
    fn test_payload_deserializes_from_wire() {
        let payload: Payload = serde_json::from_value(json!({
            "type": "template",
            "altText": "alt",
            "template": {
                "type": "carousel",
                "columns": [{"text": "c1", "actions": []}]
            }
        }))
        .unwrap();

        assert_eq!(
            payload,
            Payload::Template {
                alt_text: "alt".to_string(),
                template: Template::Carousel {
                    columns: vec![Column::new("c1")]
                }
            }
        );
    }
}
