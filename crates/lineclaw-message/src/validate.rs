//! Validation primitives shared by every message variant
//!
//! The two predicates (`is_url`, `is_finite_number`) are total and pure.
//! The `require_*` helpers wrap them into field-level checks that produce a
//! [`MessageError`] naming the offending field.

use crate::error::{MessageError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Maximum length of any URL the platform accepts
pub const MAX_URL_LENGTH: usize = 1000;

/// Maximum text length once a title or image is attached to a template
pub const MAX_DECORATED_TEXT_LENGTH: usize = 60;

/// `<scheme>://<authority>[path/query/fragment]`, no whitespace anywhere
static URL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+(?:[/?#]\S*)?$").ok()
});

/// Syntactic URL check. No resolution, no scheme allow-list.
pub fn is_url(value: &str) -> bool {
    URL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

/// A number as supplied by the caller: an integer, a float or a numeric string
///
/// The representation is kept as given so the payload carries exactly what
/// the caller passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Numeric string such as `"12"` or `"35.65"`
    Text(String),
}

impl Numeric {
    /// The value as `f64`, if it is a finite number
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// True iff the value is (or parses to) a finite number
pub fn is_finite_number(value: &Numeric) -> bool {
    value.as_f64().is_some()
}

/// Surface length of a string in characters
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Non-empty string of at most `max` characters
pub(crate) fn require_text(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.is_empty() {
        return Err(MessageError::Required { field });
    }
    check_length(field, value, max)
}

/// Optional string: empty counts as absent, otherwise at most `max` characters
pub(crate) fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => {
            check_length(field, v, max)?;
            Ok(Some(v.to_string()))
        }
        None => Ok(None),
    }
}

/// Non-empty, syntactically valid URL within the platform's length limit
pub(crate) fn require_url(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(MessageError::Required { field });
    }
    if !is_url(value) {
        return Err(MessageError::InvalidUrl { field });
    }
    check_length(field, value, MAX_URL_LENGTH)
}

/// Finite number, numeric strings included
pub(crate) fn require_number(field: &'static str, value: &Numeric) -> Result<()> {
    if is_finite_number(value) {
        Ok(())
    } else {
        Err(MessageError::InvalidNumber { field })
    }
}

/// Text sitting next to a title or image has to stay short
pub(crate) fn check_decorated_text(text: &str) -> Result<()> {
    let actual = char_len(text);
    if actual > MAX_DECORATED_TEXT_LENGTH {
        return Err(MessageError::TextTooLongForDecoration {
            max: MAX_DECORATED_TEXT_LENGTH,
            actual,
        });
    }
    Ok(())
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    let actual = char_len(value);
    if actual > max {
        return Err(MessageError::TooLong { field, max, actual });
    }
    Ok(())
}
