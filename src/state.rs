//! List State Manager
//!
//! Owns the ordered list and the form, and applies every user intent.
//! Pure: no browser access, so it runs under plain `cargo test`.

use crate::config::WidgetConfig;
use crate::error::{ReorderError, ValidationError};
use crate::form::FormState;
use crate::models::{IdGenerator, TodoId, TodoItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoState {
    items: Vec<TodoItem>,
    form: FormState,
    ids: IdGenerator,
}

impl TodoState {
    /// Build state around a list loaded from storage
    pub fn new(items: Vec<TodoItem>, config: &WidgetConfig) -> Self {
        let ids = IdGenerator::after(&items);
        Self {
            items,
            form: FormState::new(config.max_input_length),
            ids,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepend a new item. Only the empty string is rejected; whitespace
    /// counts as a title.
    pub fn add_item(&mut self, title: impl Into<String>) -> Result<TodoId, ValidationError> {
        let title = title.into();
        let limit = self.form.max_len();

        let rejected = if title.is_empty() {
            Some(ValidationError::EmptyTitle)
        } else if title.chars().count() > limit {
            Some(ValidationError::TooLong { limit })
        } else {
            None
        };
        if let Some(err) = rejected {
            self.form.reject(err.clone());
            return Err(err);
        }

        let id = self.ids.next_id(|id| self.items.iter().any(|item| item.id == id));
        self.items.insert(0, TodoItem::new(id, title));
        self.form.reset();
        Ok(id)
    }

    /// Add whatever is currently typed in the form
    pub fn submit(&mut self) -> Result<TodoId, ValidationError> {
        let title = self.form.value().to_string();
        self.add_item(title)
    }

    pub fn update_input(&mut self, raw: &str) {
        self.form.update(raw);
    }

    /// Returns whether an item was removed; unknown ids are ignored
    pub fn remove_item(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Move the item at `old_index` to `new_index`, shifting the items in
    /// between. A `new_index` past the end lands on the last position.
    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> Result<(), ReorderError> {
        let len = self.items.len();
        if old_index >= len {
            return Err(ReorderError::OutOfRange { index: old_index, len });
        }
        let new_index = new_index.min(len - 1);
        let item = self.items.remove(old_index);
        self.items.insert(new_index, item);
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormStatus;

    fn titles(state: &TodoState) -> Vec<&str> {
        state.items().iter().map(|i| i.title.as_str()).collect()
    }

    fn state_with(titles: &[&str]) -> TodoState {
        let items = titles
            .iter()
            .enumerate()
            .map(|(i, t)| TodoItem::new(TodoId(i as u64 + 1), *t))
            .collect();
        TodoState::new(items, &WidgetConfig::default())
    }

    #[test]
    fn test_add_prepends() {
        let mut state = state_with(&["A"]);
        let id = state.add_item("B").unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.items()[0].id, id);
        assert_eq!(titles(&state), vec!["B", "A"]);
    }

    #[test]
    fn test_add_ids_are_unique() {
        let mut state = state_with(&["A", "B"]);
        let first = state.add_item("C").unwrap();
        let second = state.add_item("D").unwrap();
        assert_ne!(first, second);
        let mut ids: Vec<_> = state.items().iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut state = state_with(&[]);
        let first = state.add_item("A").unwrap();
        state.clear_all();
        let second = state.add_item("B").unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_add_after_largest_id_stays_unique() {
        let items = vec![
            TodoItem::new(TodoId(crate::models::MAX_SAFE_ID), "Max"),
            TodoItem::new(TodoId(1), "One"),
        ];
        let mut state = TodoState::new(items, &WidgetConfig::default());
        let id = state.add_item("New").unwrap();
        assert_eq!(id, TodoId(2));
        let again = state.add_item("Newer").unwrap();
        assert_eq!(again, TodoId(3));
    }

    #[test]
    fn test_repeated_overlong_keystrokes_stay_at_limit() {
        let mut state = state_with(&[]);
        state.update_input(&"x".repeat(100));
        state.update_input(&"x".repeat(101));
        state.update_input(&"x".repeat(102));
        assert_eq!(state.form().value(), "x".repeat(100));
        assert_eq!(state.form().remaining(), 0);
        assert!(state.form().has_error());
    }

    #[test]
    fn test_submit_empty_sets_error() {
        let mut state = state_with(&["A"]);
        let err = state.submit().unwrap_err();
        assert_eq!(err, ValidationError::EmptyTitle);
        assert_eq!(titles(&state), vec!["A"]);
        assert!(state.form().has_error());
        assert_eq!(state.form().error_message(), "Please enter your to-do.");
    }

    #[test]
    fn test_submit_whitespace_is_accepted() {
        let mut state = state_with(&[]);
        state.update_input("   ");
        assert!(state.submit().is_ok());
        assert_eq!(titles(&state), vec!["   "]);
    }

    #[test]
    fn test_submit_resets_form() {
        let mut state = state_with(&[]);
        state.submit().unwrap_err();
        state.update_input("Call mom");
        state.submit().unwrap();
        assert_eq!(titles(&state), vec!["Call mom"]);
        assert_eq!(state.form().value(), "");
        assert_eq!(state.form().remaining(), 100);
        assert_eq!(state.form().status(), &FormStatus::Valid);
    }

    #[test]
    fn test_overlong_input_truncated_then_submitted() {
        let mut state = state_with(&[]);
        state.update_input(&"z".repeat(150));
        assert_eq!(state.form().error_message(), "Input limit is 100 characters.");
        state.submit().unwrap();
        assert_eq!(state.items()[0].title.chars().count(), 100);
    }

    #[test]
    fn test_add_item_rejects_overlong_title() {
        let mut state = state_with(&[]);
        let err = state.add_item("q".repeat(101)).unwrap_err();
        assert_eq!(err, ValidationError::TooLong { limit: 100 });
        assert!(state.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut state = state_with(&["A", "B", "C"]);
        assert!(state.remove_item(TodoId(2)));
        assert_eq!(titles(&state), vec!["A", "C"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut state = state_with(&["A", "B"]);
        assert!(!state.remove_item(TodoId(42)));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_reorder_forward() {
        let mut state = state_with(&["A", "B", "C", "D"]);
        state.reorder(0, 2).unwrap();
        assert_eq!(titles(&state), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_reorder_backward() {
        let mut state = state_with(&["A", "B", "C", "D"]);
        state.reorder(3, 1).unwrap();
        assert_eq!(titles(&state), vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_reorder_same_index() {
        let mut state = state_with(&["A", "B"]);
        state.reorder(1, 1).unwrap();
        assert_eq!(titles(&state), vec!["A", "B"]);
    }

    #[test]
    fn test_reorder_out_of_range_source_leaves_list() {
        let mut state = state_with(&["A", "B"]);
        let err = state.reorder(5, 0).unwrap_err();
        assert_eq!(err, ReorderError::OutOfRange { index: 5, len: 2 });
        assert_eq!(titles(&state), vec!["A", "B"]);
    }

    #[test]
    fn test_reorder_target_past_end_is_clamped() {
        let mut state = state_with(&["A", "B", "C"]);
        state.reorder(0, 10).unwrap();
        assert_eq!(titles(&state), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_on_empty_list() {
        let mut state = state_with(&[]);
        assert!(state.reorder(0, 0).is_err());
    }

    #[test]
    fn test_clear_all() {
        let mut state = state_with(&["A", "B"]);
        state.clear_all();
        assert!(state.is_empty());
        state.clear_all();
        assert!(state.is_empty());
    }
}
