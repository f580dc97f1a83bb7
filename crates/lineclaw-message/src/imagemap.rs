//! Imagemap message builder

use crate::action::{Area, ImagemapAction};
use crate::capped::Capped;
use crate::error::Result;
use crate::payload::{BaseSize, Payload};
use crate::validate::{require_number, require_text, require_url, Numeric};
use crate::LineMessage;
use tracing::trace;

/// Maximum number of tap actions on one imagemap
pub const MAX_IMAGEMAP_ACTIONS: usize = 50;
/// Maximum alternative text length
pub const MAX_ALT_TEXT_LENGTH: usize = 400;

/// Image with up to 50 tappable areas
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMap {
    base_url: String,
    alt_text: String,
    base_size: BaseSize,
    actions: Capped<ImagemapAction>,
}

impl ImageMap {
    /// Validate the base image; actions are appended afterwards
    pub fn new(
        base_url: &str,
        width: impl Into<Numeric>,
        height: impl Into<Numeric>,
        alt_text: &str,
    ) -> Result<Self> {
        require_url("baseUrl", base_url)?;
        let width = width.into();
        require_number("width", &width)?;
        let height = height.into();
        require_number("height", &height)?;
        require_text("altText", alt_text, MAX_ALT_TEXT_LENGTH)?;

        Ok(Self {
            base_url: base_url.to_string(),
            alt_text: alt_text.to_string(),
            base_size: BaseSize { height, width },
            actions: Capped::new(MAX_IMAGEMAP_ACTIONS, "action"),
        })
    }

    /// Append a prepared action after checking its area and the action cap
    pub fn add_action(&mut self, action: ImagemapAction) -> Result<&mut Self> {
        action.area().validate()?;
        self.actions.push(action)?;
        Ok(self)
    }

    /// Append an area that opens `link_uri`
    pub fn add_uri_action(&mut self, link_uri: &str, area: Area) -> Result<&mut Self> {
        let action = ImagemapAction::uri(link_uri, area)?;
        self.add_action(action)
    }

    /// Append an area that sends `text`
    pub fn add_message_action(&mut self, text: &str, area: Area) -> Result<&mut Self> {
        let action = ImagemapAction::message(text, area)?;
        self.add_action(action)
    }

    /// Actions appended so far
    pub fn actions(&self) -> &[ImagemapAction] {
        self.actions.as_slice()
    }
}

impl LineMessage for ImageMap {
    fn finalize(&self) -> Result<Payload> {
        let actions = self.actions.non_empty()?.to_vec();
        trace!(actions = actions.len(), "finalized imagemap");

        Ok(Payload::Imagemap {
            base_url: self.base_url.clone(),
            alt_text: self.alt_text.clone(),
            base_size: self.base_size.clone(),
            actions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MessageError;
    use serde_json::json;

    fn imagemap() -> ImageMap {
        ImageMap::new("https://example.com/bot/images/rm001", 1040, 1040, "This is an imagemap")
            .unwrap()
    }

    #[test]
    fn test_constructor_validation() {
        assert_eq!(
            ImageMap::new("nope", 1040, 1040, "alt"),
            Err(MessageError::InvalidUrl { field: "baseUrl" })
        );
        assert_eq!(
            ImageMap::new("https://x.com/i", "wide", 1040, "alt"),
            Err(MessageError::InvalidNumber { field: "width" })
        );
        assert_eq!(
            ImageMap::new("https://x.com/i", 1040, f64::NAN, "alt"),
            Err(MessageError::InvalidNumber { field: "height" })
        );
        assert_eq!(
            ImageMap::new("https://x.com/i", 1040, 1040, ""),
            Err(MessageError::Required { field: "altText" })
        );
        assert!(matches!(
            ImageMap::new("https://x.com/i", 1040, 1040, &"a".repeat(401)),
            Err(MessageError::TooLong { field: "altText", max: 400, .. })
        ));
    }

    #[test]
    fn test_finalize_without_actions_fails() {
        assert_eq!(
            imagemap().finalize(),
            Err(MessageError::Empty { item: "action" })
        );
    }

    #[test]
    fn test_full_payload() {
        let mut message = imagemap();
        message
            .add_uri_action("https://example.com/", Area::new(0, 0, 520, 1040))
            .unwrap()
            .add_message_action("hello", Area::new(520, 0, 520, 1040))
            .unwrap();

        assert_eq!(
            serde_json::to_value(message.finalize().unwrap()).unwrap(),
            json!({
                "type": "imagemap",
                "baseUrl": "https://example.com/bot/images/rm001",
                "altText": "This is an imagemap",
                "baseSize": {"height": 1040, "width": 1040},
                "actions": [
                    {
                        "type": "uri",
                        "linkUri": "https://example.com/",
                        "area": {"x": 0, "y": 0, "width": 520, "height": 1040}
                    },
                    {
                        "type": "message",
                        "text": "hello",
                        "area": {"x": 520, "y": 0, "width": 520, "height": 1040}
                    }
                ]
            })
        );
    }

    #[test]
    fn test_invalid_area_rejected() {
        let mut message = imagemap();
        assert_eq!(
            message
                .add_message_action("hi", Area::new(0, "top", 10, 10))
                .map(|_| ()),
            Err(MessageError::InvalidArea)
        );
        assert!(message.actions().is_empty());
    }

    #[test]
    fn test_invalid_link_uri_rejected() {
        let mut message = imagemap();
        assert_eq!(
            message
                .add_uri_action("example.com/page", Area::new(0, 0, 10, 10))
                .map(|_| ()),
            Err(MessageError::InvalidUrl { field: "linkUri" })
        );

        let long = format!("https://example.com/{}", "a".repeat(1000));
        assert!(matches!(
            message.add_uri_action(&long, Area::new(0, 0, 10, 10)),
            Err(MessageError::TooLong {
                field: "linkUri",
                max: 1000,
                ..
            })
        ));
        assert!(message.actions().is_empty());
    }

    #[test]
    fn test_action_cap() {
        let mut message = imagemap();
        for i in 0..MAX_IMAGEMAP_ACTIONS {
            message
                .add_message_action(&format!("tap {i}"), Area::new(0, 0, 10, 10))
                .unwrap();
        }

        let result = message.add_message_action("one too many", Area::new(0, 0, 10, 10));
        assert_eq!(
            result.map(|_| ()),
            Err(MessageError::CapacityExceeded {
                item: "action",
                max: 50
            })
        );
        assert_eq!(message.actions().len(), MAX_IMAGEMAP_ACTIONS);
        assert!(message.finalize().is_ok());
    }

    #[test]
    fn test_finalize_recomputes_from_current_state() {
        let mut message = imagemap();
        message
            .add_message_action("first", Area::new(0, 0, 1, 1))
            .unwrap();
        let first = message.finalize().unwrap();
        assert_eq!(first, message.finalize().unwrap());

        message
            .add_message_action("second", Area::new(1, 1, 1, 1))
            .unwrap();
        let Payload::Imagemap { actions, .. } = message.finalize().unwrap() else {
            panic!("expected an imagemap payload");
        };
        assert_eq!(actions.len(), 2);
    }
}
