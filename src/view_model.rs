//! View Model
//!
//! What the page shows for a given state, without touching the DOM.

use crate::form::FormState;
use crate::models::{TodoId, TodoItem};

pub const EMPTY_STATE_MESSAGE: &str = "You did everything you had to, great job!";

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TodoId,
    pub index: usize,
    /// 1-based number shown on the drag handle
    pub position: usize,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty(&'static str),
    Rows(Vec<RowView>),
}

impl ListView {
    pub fn from_items(items: &[TodoItem]) -> Self {
        if items.is_empty() {
            return ListView::Empty(EMPTY_STATE_MESSAGE);
        }
        ListView::Rows(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| RowView {
                    id: item.id,
                    index,
                    position: index + 1,
                    title: item.title.clone(),
                })
                .collect(),
        )
    }
}

pub fn counter_text(form: &FormState) -> String {
    format!("{} characters left.", form.remaining())
}

/// Error banner text, if the banner should be shown
pub fn error_banner(form: &FormState) -> Option<String> {
    form.has_error().then(|| form.error_message())
}

/// The "delete all" control only appears for a non-empty list
pub fn show_clear_all(items: &[TodoItem]) -> bool {
    !items.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use crate::state::TodoState;

    #[test]
    fn test_rows_are_numbered_from_one() {
        let items = vec![TodoItem::new(TodoId(9), "A"), TodoItem::new(TodoId(4), "B")];
        let ListView::Rows(rows) = ListView::from_items(&items) else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[1].position, 2);
        assert_eq!(rows[1].id, TodoId(4));
        assert_eq!(rows[1].title, "B");
    }

    #[test]
    fn test_clear_shows_empty_state() {
        let items = vec![TodoItem::new(TodoId(1), "A"), TodoItem::new(TodoId(2), "B")];
        let mut state = TodoState::new(items, &WidgetConfig::default());
        assert!(show_clear_all(state.items()));

        state.clear_all();
        assert_eq!(
            ListView::from_items(state.items()),
            ListView::Empty("You did everything you had to, great job!")
        );
        assert!(!show_clear_all(state.items()));
    }

    #[test]
    fn test_counter_and_banner() {
        let mut state = TodoState::new(Vec::new(), &WidgetConfig::default());
        assert_eq!(counter_text(state.form()), "100 characters left.");
        assert_eq!(error_banner(state.form()), None);

        let _ = state.submit();
        assert_eq!(
            error_banner(state.form()).as_deref(),
            Some("Please enter your to-do.")
        );

        state.update_input("abc");
        assert_eq!(counter_text(state.form()), "97 characters left.");
        assert_eq!(error_banner(state.form()), None);
    }
}
