//! Actions attached to template and imagemap messages

use crate::error::{MessageError, Result};
use crate::validate::{is_finite_number, optional_text, require_text, require_url, Numeric};
use serde::{Deserialize, Serialize};

/// Maximum label length on a template action
pub const MAX_LABEL_LENGTH: usize = 20;
/// Maximum text length sent back by a template message action
pub const MAX_MESSAGE_TEXT_LENGTH: usize = 300;
/// Maximum postback data length
pub const MAX_POSTBACK_DATA_LENGTH: usize = 300;
/// Maximum text length sent back by an imagemap message action
pub const MAX_IMAGEMAP_TEXT_LENGTH: usize = 400;

/// An action button on a template message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Sends `text` as a message from the user
    Message {
        /// Button label
        label: String,
        /// Text sent when tapped
        text: String,
    },
    /// Sends a postback event carrying `data` to the bot
    Postback {
        /// Button label
        label: String,
        /// Postback payload
        data: String,
        /// Optional text also sent as a user message
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// Opens `uri`
    Uri {
        /// Button label
        label: String,
        /// Target URI
        uri: String,
    },
}

impl Action {
    /// Reply-text action
    pub fn message(label: &str, text: &str) -> Result<Self> {
        require_text("label", label, MAX_LABEL_LENGTH)?;
        require_text("text", text, MAX_MESSAGE_TEXT_LENGTH)?;

        Ok(Self::Message {
            label: label.to_string(),
            text: text.to_string(),
        })
    }

    /// Postback action; `text` is omitted from the payload when empty
    pub fn postback(label: &str, data: &str, text: Option<&str>) -> Result<Self> {
        require_text("label", label, MAX_LABEL_LENGTH)?;
        require_text("data", data, MAX_POSTBACK_DATA_LENGTH)?;
        let text = optional_text("text", text, MAX_MESSAGE_TEXT_LENGTH)?;

        Ok(Self::Postback {
            label: label.to_string(),
            data: data.to_string(),
            text,
        })
    }

    /// Navigation action
    pub fn uri(label: &str, uri: &str) -> Result<Self> {
        require_text("label", label, MAX_LABEL_LENGTH)?;
        require_url("uri", uri)?;

        Ok(Self::Uri {
            label: label.to_string(),
            uri: uri.to_string(),
        })
    }

    /// Button label
    pub fn label(&self) -> &str {
        match self {
            Self::Message { label, .. } | Self::Postback { label, .. } | Self::Uri { label, .. } => {
                label
            }
        }
    }
}

/// Tappable rectangle on an imagemap, in base-size pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    /// Left edge
    pub x: Numeric,
    /// Top edge
    pub y: Numeric,
    /// Width
    pub width: Numeric,
    /// Height
    pub height: Numeric,
}

impl Area {
    /// Build an area; coordinates are checked when the action is appended
    pub fn new(
        x: impl Into<Numeric>,
        y: impl Into<Numeric>,
        width: impl Into<Numeric>,
        height: impl Into<Numeric>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    /// All four values are finite numbers
    pub fn is_valid(&self) -> bool {
        [&self.x, &self.y, &self.width, &self.height]
            .into_iter()
            .all(is_finite_number)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(MessageError::InvalidArea)
        }
    }
}

/// An action bound to an area of an imagemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImagemapAction {
    /// Opens `link_uri` when the area is tapped
    #[serde(rename_all = "camelCase")]
    Uri {
        /// Target URI
        link_uri: String,
        /// Tappable area
        area: Area,
    },
    /// Sends `text` when the area is tapped
    Message {
        /// Text sent as the user
        text: String,
        /// Tappable area
        area: Area,
    },
}

impl ImagemapAction {
    /// Navigation target
    pub fn uri(link_uri: &str, area: Area) -> Result<Self> {
        require_url("linkUri", link_uri)?;

        Ok(Self::Uri {
            link_uri: link_uri.to_string(),
            area,
        })
    }

    /// Reply-text target
    pub fn message(text: &str, area: Area) -> Result<Self> {
        require_text("text", text, MAX_IMAGEMAP_TEXT_LENGTH)?;

        Ok(Self::Message {
            text: text.to_string(),
            area,
        })
    }

    /// The tappable area
    pub fn area(&self) -> &Area {
        match self {
            Self::Uri { area, .. } | Self::Message { area, .. } => area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_action_shape() {
        let action = Action::message("Yes", "YES").unwrap();
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "message", "label": "Yes", "text": "YES"})
        );
    }

    #[test]
    fn test_postback_without_text_omits_field() {
        let action = Action::postback("Buy", "action=buy&id=1", None).unwrap();
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "postback", "label": "Buy", "data": "action=buy&id=1"})
        );

        let action = Action::postback("Buy", "action=buy&id=1", Some("")).unwrap();
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "postback", "label": "Buy", "data": "action=buy&id=1"})
        );
    }

    #[test]
    fn test_postback_with_text() {
        let action = Action::postback("Buy", "id=1", Some("I want it")).unwrap();
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "postback", "label": "Buy", "data": "id=1", "text": "I want it"})
        );
    }

    #[test]
    fn test_label_bounds() {
        assert_eq!(
            Action::message("", "x"),
            Err(MessageError::Required { field: "label" })
        );
        assert_eq!(
            Action::uri(&"l".repeat(21), "http://x.com"),
            Err(MessageError::TooLong {
                field: "label",
                max: MAX_LABEL_LENGTH,
                actual: 21
            })
        );
        assert!(Action::message(&"l".repeat(20), "x").is_ok());
    }

    #[test]
    fn test_postback_bounds() {
        assert_eq!(
            Action::postback("l", "", None),
            Err(MessageError::Required { field: "data" })
        );
        assert!(matches!(
            Action::postback("l", &"d".repeat(301), None),
            Err(MessageError::TooLong { field: "data", .. })
        ));
        assert!(matches!(
            Action::postback("l", "d", Some(&"t".repeat(301))),
            Err(MessageError::TooLong { field: "text", .. })
        ));
    }

    #[test]
    fn test_uri_action_requires_valid_url() {
        assert_eq!(
            Action::uri("Open", "not a url"),
            Err(MessageError::InvalidUrl { field: "uri" })
        );
        let action = Action::uri("Open", "https://example.com").unwrap();
        assert_eq!(action.label(), "Open");
    }

    #[test]
    fn test_imagemap_action_shape() {
        let action =
            ImagemapAction::uri("https://example.com", Area::new(0, 0, 520, 1040)).unwrap();
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({
                "type": "uri",
                "linkUri": "https://example.com",
                "area": {"x": 0, "y": 0, "width": 520, "height": 1040}
            })
        );
    }

    #[test]
    fn test_imagemap_message_text_bound() {
        let area = Area::new(0, 0, 1, 1);
        assert!(ImagemapAction::message(&"t".repeat(400), area.clone()).is_ok());
        assert!(matches!(
            ImagemapAction::message(&"t".repeat(401), area),
            Err(MessageError::TooLong { field: "text", max: 400, .. })
        ));
    }

    #[test]
    fn test_area_validity() {
        assert!(Area::new(0, "10", 1.5, 2).is_valid());
        assert!(!Area::new(0, "ten", 1, 1).is_valid());
        assert!(!Area::new(f64::NAN, 0, 1, 1).is_valid());
    }
}
