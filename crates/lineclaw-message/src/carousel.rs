//! Carousel template builder
//!
//! Column-scoped appends (`add_image`, `add_title`, actions) always act on
//! the most recently added column.

use crate::action::Action;
use crate::capped::Capped;
use crate::error::Result;
use crate::imagemap::MAX_ALT_TEXT_LENGTH;
use crate::payload::{Column, Payload, Template};
use crate::template::{TemplateActions, MAX_TITLE_LENGTH};
use crate::validate::{check_decorated_text, require_text, require_url};
use crate::LineMessage;
use tracing::trace;

/// Maximum number of columns in a carousel
pub const MAX_CAROUSEL_COLUMNS: usize = 5;
/// Maximum number of actions in one column
pub const MAX_COLUMN_ACTIONS: usize = 3;
/// Maximum column text length
pub const MAX_COLUMN_TEXT_LENGTH: usize = 120;

#[derive(Debug, Clone, PartialEq)]
struct ColumnBuilder {
    text: String,
    title: Option<String>,
    thumbnail_image_url: Option<String>,
    actions: Capped<Action>,
}

impl ColumnBuilder {
    fn to_column(&self) -> Column {
        Column {
            text: self.text.clone(),
            title: self.title.clone(),
            thumbnail_image_url: self.thumbnail_image_url.clone(),
            actions: self.actions.as_slice().to_vec(),
        }
    }
}

/// Carousel template: up to five columns of up to three actions each
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    alt_text: String,
    columns: Capped<ColumnBuilder>,
}

impl Carousel {
    /// `alt_text` up to 400 characters
    pub fn new(alt_text: &str) -> Result<Self> {
        require_text("altText", alt_text, MAX_ALT_TEXT_LENGTH)?;

        Ok(Self {
            alt_text: alt_text.to_string(),
            columns: Capped::new(MAX_CAROUSEL_COLUMNS, "column"),
        })
    }

    /// Start a new column; later column appends target it
    pub fn add_column(&mut self, text: &str) -> Result<&mut Self> {
        require_text("text", text, MAX_COLUMN_TEXT_LENGTH)?;

        self.columns.push(ColumnBuilder {
            text: text.to_string(),
            title: None,
            thumbnail_image_url: None,
            actions: Capped::new(MAX_COLUMN_ACTIONS, "action").within("column"),
        })?;
        Ok(self)
    }

    /// Set the last column's thumbnail
    pub fn add_image(&mut self, url: &str) -> Result<&mut Self> {
        let column = self.columns.last_mut()?;
        require_url("thumbnailImageUrl", url)?;
        check_decorated_text(&column.text)?;

        column.thumbnail_image_url = Some(url.to_string());
        Ok(self)
    }

    /// Set the last column's title
    pub fn add_title(&mut self, title: &str) -> Result<&mut Self> {
        let column = self.columns.last_mut()?;
        require_text("title", title, MAX_TITLE_LENGTH)?;
        check_decorated_text(&column.text)?;

        column.title = Some(title.to_string());
        Ok(self)
    }

    /// Columns in their current state
    pub fn columns(&self) -> Vec<Column> {
        self.columns
            .as_slice()
            .iter()
            .map(ColumnBuilder::to_column)
            .collect()
    }
}

impl TemplateActions for Carousel {
    /// Appends to the last column
    fn add_action(&mut self, action: Action) -> Result<&mut Self> {
        self.columns.last_mut()?.actions.push(action)?;
        Ok(self)
    }
}

impl LineMessage for Carousel {
    fn finalize(&self) -> Result<Payload> {
        let columns: Vec<Column> = self
            .columns
            .non_empty()?
            .iter()
            .map(ColumnBuilder::to_column)
            .collect();
        trace!(columns = columns.len(), "finalized carousel template");

        Ok(Payload::Template {
            alt_text: self.alt_text.clone(),
            template: Template::Carousel { columns },
        })
    }
}
