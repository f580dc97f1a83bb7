//! Error types for message construction

use thiserror::Error;

/// Validation failures raised while building a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// A required field was empty or missing
    #[error("{field} is required")]
    Required {
        /// Field name
        field: &'static str,
    },

    /// A string field exceeded its length bound
    #[error("{field} can not be more than {max} characters")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Maximum allowed characters
        max: usize,
        /// Actual number of characters
        actual: usize,
    },

    /// A field that must hold a URL did not parse as one
    #[error("{field} needs to be a valid URL")]
    InvalidUrl {
        /// Field name
        field: &'static str,
    },

    /// A numeric field was not a finite number
    #[error("{field} needs to be a finite number")]
    InvalidNumber {
        /// Field name
        field: &'static str,
    },

    /// An imagemap action area had a non-numeric coordinate or size
    #[error("A valid area is required for an action")]
    InvalidArea,

    /// An append would go past the builder's hard limit
    #[error("There can not be more than {max} {item}s")]
    CapacityExceeded {
        /// Singular item name (`action`, `column`, ...)
        item: &'static str,
        /// The hard limit
        max: usize,
    },

    /// An append would go past the limit of the container it lands in
    #[error("There can not be more than {max} {item}s in a {scope}")]
    CapacityExceededIn {
        /// Singular item name
        item: &'static str,
        /// The hard limit
        max: usize,
        /// Container the limit applies to (`column`)
        scope: &'static str,
    },

    /// Text is too long to be paired with a title or an image
    #[error("Text can not be more than {max} characters when with an image or title")]
    TextTooLongForDecoration {
        /// Maximum text length allowed next to a title or image
        max: usize,
        /// Actual text length
        actual: usize,
    },

    /// A builder was finalized (or targeted) before anything was appended
    #[error("Add at least one {item} first!")]
    Empty {
        /// Singular item name (`action`, `column`, ...)
        item: &'static str,
    },
}

impl MessageError {
    /// Name of the field the error refers to, if it is about a single field
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Required { field }
            | Self::TooLong { field, .. }
            | Self::InvalidUrl { field }
            | Self::InvalidNumber { field } => Some(field),
            Self::TextTooLongForDecoration { .. } => Some("text"),
            Self::InvalidArea => Some("area"),
            Self::CapacityExceeded { .. }
            | Self::CapacityExceededIn { .. }
            | Self::Empty { .. } => None,
        }
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, MessageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_platform_wording() {
        let err = MessageError::CapacityExceeded {
            item: "action",
            max: 2,
        };
        assert_eq!(err.to_string(), "There can not be more than 2 actions");

        let err = MessageError::CapacityExceededIn {
            item: "action",
            max: 3,
            scope: "column",
        };
        assert_eq!(
            err.to_string(),
            "There can not be more than 3 actions in a column"
        );

        let err = MessageError::Empty { item: "column" };
        assert_eq!(err.to_string(), "Add at least one column first!");

        let err = MessageError::TooLong {
            field: "altText",
            max: 400,
            actual: 401,
        };
        assert_eq!(err.to_string(), "altText can not be more than 400 characters");
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(
            MessageError::InvalidUrl {
                field: "originalContentUrl"
            }
            .field(),
            Some("originalContentUrl")
        );
        assert_eq!(
            MessageError::TextTooLongForDecoration { max: 60, actual: 61 }.field(),
            Some("text")
        );
        assert_eq!(MessageError::Empty { item: "action" }.field(), None);
    }
}
