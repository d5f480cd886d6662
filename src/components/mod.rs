//! UI Components
//!
//! Leptos components for the form and the sortable list.

mod todo_form;
mod form_feedback;
mod todo_list_view;
mod todo_row;
mod clear_all_button;

pub use todo_form::TodoForm;
pub use form_feedback::{CharCounter, FormErrorBanner};
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
pub use clear_all_button::ClearAllButton;
