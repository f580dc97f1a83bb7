//! Ordered accumulator with a hard upper bound
//!
//! Shared by every append-based builder: imagemap actions, template actions,
//! carousel columns and the per-column action lists.

use crate::error::{MessageError, Result};

/// A `Vec<T>` that refuses to grow past `max` items
#[derive(Debug, Clone, PartialEq)]
pub struct Capped<T> {
    items: Vec<T>,
    max: usize,
    item: &'static str,
    scope: Option<&'static str>,
}

impl<T> Capped<T> {
    /// Empty accumulator; `item` is the singular name used in error messages
    pub fn new(max: usize, item: &'static str) -> Self {
        Self {
            items: Vec::new(),
            max,
            item,
            scope: None,
        }
    }

    /// Name the container the limit applies to, for error messages
    #[must_use]
    pub fn within(mut self, scope: &'static str) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Append, or fail without touching the accumulator when it is full
    pub fn push(&mut self, value: T) -> Result<()> {
        self.ensure_room()?;
        self.items.push(value);
        Ok(())
    }

    /// Fails when one more item would not fit
    pub fn ensure_room(&self) -> Result<()> {
        if self.items.len() >= self.max {
            return Err(match self.scope {
                Some(scope) => MessageError::CapacityExceededIn {
                    item: self.item,
                    max: self.max,
                    scope,
                },
                None => MessageError::CapacityExceeded {
                    item: self.item,
                    max: self.max,
                },
            });
        }
        Ok(())
    }

    /// The items, or the "add at least one" error when there are none
    pub fn non_empty(&self) -> Result<&[T]> {
        if self.items.is_empty() {
            return Err(MessageError::Empty { item: self.item });
        }
        Ok(&self.items)
    }

    /// Most recently appended item
    pub fn last_mut(&mut self) -> Result<&mut T> {
        self.items
            .last_mut()
            .ok_or(MessageError::Empty { item: self.item })
    }

    /// Items appended so far
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Number of items appended so far
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The hard limit
    pub fn max(&self) -> usize {
        self.max
    }
}
