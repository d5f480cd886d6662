//! Models
//!
//! List entries and their identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a to-do, stored as a bare JSON number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
}

impl TodoItem {
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self { id, title: title.into() }
    }
}

/// Largest id that survives a round trip through a JS number
/// (`Number.MAX_SAFE_INTEGER`)
pub const MAX_SAFE_ID: u64 = (1 << 53) - 1;

/// Monotonic id source; never hands out the same id twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    /// `None` once the counter has run past `MAX_SAFE_ID`
    next: Option<u64>,
}

impl IdGenerator {
    /// Start above every id already in `items`
    pub fn after(items: &[TodoItem]) -> Self {
        Self::above(items.iter().map(|item| item.id).max())
    }

    /// Start right after `max`, or at 1 when there is nothing to avoid
    pub fn above(max: Option<TodoId>) -> Self {
        let next = max.map_or(Some(1), |id| id.0.checked_add(1));
        Self { next }
    }

    /// Next counter value; once the counter is exhausted, the lowest id
    /// for which `is_taken` is false.
    pub fn next_id(&mut self, is_taken: impl Fn(TodoId) -> bool) -> TodoId {
        match self.next.filter(|next| *next <= MAX_SAFE_ID) {
            Some(next) => {
                self.next = next.checked_add(1);
                TodoId(next)
            }
            None => {
                self.next = None;
                (1..=MAX_SAFE_ID)
                    .map(TodoId)
                    .find(|id| !is_taken(*id))
                    .unwrap_or(TodoId(MAX_SAFE_ID))
            }
        }
    }
}

/// Truncate to at most `max` characters (not bytes)
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
