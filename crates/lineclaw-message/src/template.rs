//! Buttons and confirm template builders, plus the action helpers every
//! template shares

use crate::action::Action;
use crate::capped::Capped;
use crate::error::Result;
use crate::imagemap::MAX_ALT_TEXT_LENGTH;
use crate::payload::{Payload, Template};
use crate::validate::{check_decorated_text, require_text, require_url};
use crate::LineMessage;
use tracing::trace;

/// Maximum buttons template text length
pub const MAX_BUTTONS_TEXT_LENGTH: usize = 160;
/// Maximum confirm template text length
pub const MAX_CONFIRM_TEXT_LENGTH: usize = 240;
/// Maximum template title length
pub const MAX_TITLE_LENGTH: usize = 40;
/// Maximum number of buttons on a buttons template
pub const MAX_BUTTONS_ACTIONS: usize = 4;
/// Number of buttons on a confirm template
pub const MAX_CONFIRM_ACTIONS: usize = 2;

/// Action appends shared by the template family
///
/// Implementors decide where an action lands; the helpers only build and
/// validate the action before handing it to [`TemplateActions::add_action`],
/// so capacity and cross-field checks run the same way for every helper.
pub trait TemplateActions {
    /// Append a prepared action
    fn add_action(&mut self, action: Action) -> Result<&mut Self>;

    /// Append a button that sends `text` as the user
    fn add_message_action(&mut self, label: &str, text: &str) -> Result<&mut Self> {
        let action = Action::message(label, text)?;
        self.add_action(action)
    }

    /// Append a button that sends a postback event
    fn add_postback_action(
        &mut self,
        label: &str,
        data: &str,
        text: Option<&str>,
    ) -> Result<&mut Self> {
        let action = Action::postback(label, data, text)?;
        self.add_action(action)
    }

    /// Append a button that opens `uri`
    fn add_uri_action(&mut self, label: &str, uri: &str) -> Result<&mut Self> {
        let action = Action::uri(label, uri)?;
        self.add_action(action)
    }
}

/// Buttons template: text with up to four actions
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    alt_text: String,
    text: String,
    title: Option<String>,
    thumbnail_image_url: Option<String>,
    actions: Capped<Action>,
}

impl Button {
    /// `text` up to 160 characters, `alt_text` up to 400
    pub fn new(text: &str, alt_text: &str) -> Result<Self> {
        require_text("text", text, MAX_BUTTONS_TEXT_LENGTH)?;
        require_text("altText", alt_text, MAX_ALT_TEXT_LENGTH)?;

        Ok(Self {
            alt_text: alt_text.to_string(),
            text: text.to_string(),
            title: None,
            thumbnail_image_url: None,
            actions: Capped::new(MAX_BUTTONS_ACTIONS, "action"),
        })
    }

    /// Set the title; the text must be 60 characters or fewer at this point
    pub fn add_title(&mut self, title: &str) -> Result<&mut Self> {
        require_text("title", title, MAX_TITLE_LENGTH)?;
        check_decorated_text(&self.text)?;

        self.title = Some(title.to_string());
        Ok(self)
    }

    /// Set the thumbnail; the text must be 60 characters or fewer at this point
    pub fn add_image(&mut self, thumbnail_image_url: &str) -> Result<&mut Self> {
        require_url("thumbnailImageUrl", thumbnail_image_url)?;
        check_decorated_text(&self.text)?;

        self.thumbnail_image_url = Some(thumbnail_image_url.to_string());
        Ok(self)
    }

    /// Actions appended so far
    pub fn actions(&self) -> &[Action] {
        self.actions.as_slice()
    }
}

impl TemplateActions for Button {
    fn add_action(&mut self, action: Action) -> Result<&mut Self> {
        self.actions.push(action)?;
        Ok(self)
    }
}

impl LineMessage for Button {
    fn finalize(&self) -> Result<Payload> {
        let actions = self.actions.non_empty()?.to_vec();
        trace!(actions = actions.len(), "finalized buttons template");

        Ok(Payload::Template {
            alt_text: self.alt_text.clone(),
            template: Template::Buttons {
                text: self.text.clone(),
                title: self.title.clone(),
                thumbnail_image_url: self.thumbnail_image_url.clone(),
                actions,
            },
        })
    }
}

/// Confirm template: a question with two actions
#[derive(Debug, Clone, PartialEq)]
pub struct Confirm {
    alt_text: String,
    text: String,
    actions: Capped<Action>,
}

impl Confirm {
    /// `text` up to 240 characters, `alt_text` up to 400
    pub fn new(text: &str, alt_text: &str) -> Result<Self> {
        require_text("text", text, MAX_CONFIRM_TEXT_LENGTH)?;
        require_text("altText", alt_text, MAX_ALT_TEXT_LENGTH)?;

        Ok(Self {
            alt_text: alt_text.to_string(),
            text: text.to_string(),
            actions: Capped::new(MAX_CONFIRM_ACTIONS, "action"),
        })
    }

    /// Actions appended so far
    pub fn actions(&self) -> &[Action] {
        self.actions.as_slice()
    }
}

impl TemplateActions for Confirm {
    fn add_action(&mut self, action: Action) -> Result<&mut Self> {
        self.actions.push(action)?;
        Ok(self)
    }
}

impl LineMessage for Confirm {
    fn finalize(&self) -> Result<Payload> {
        let actions = self.actions.non_empty()?.to_vec();
        trace!(actions = actions.len(), "finalized confirm template");

        Ok(Payload::Template {
            alt_text: self.alt_text.clone(),
            template: Template::Confirm {
                text: self.text.clone(),
                actions,
            },
        })
    }
}
