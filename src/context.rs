//! Application Context
//!
//! Shared state provided via Leptos Context API. Components send every
//! intent through here; the state manager does the actual work.

use leptos::prelude::*;
use leptos_dragdrop::SortEnd;
use log::{debug, warn};

use crate::models::{TodoId, TodoItem};
use crate::state::TodoState;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// List and form state
    pub state: RwSignal<TodoState>,
    /// The list alone; unchanged by keystrokes in the form
    pub items: Memo<Vec<TodoItem>>,
}

impl AppContext {
    pub fn new(state: RwSignal<TodoState>) -> Self {
        let items = Memo::new(move |_| state.with(|state| state.items().to_vec()));
        Self { state, items }
    }

    /// Add the typed title to the top of the list
    pub fn submit(&self) {
        self.state.update(|state| match state.submit() {
            Ok(id) => debug!(target: "APP", "Added item {}", id),
            Err(err) => debug!(target: "APP", "Rejected submission: {}", err),
        });
    }

    pub fn update_input(&self, raw: String) {
        self.state.update(|state| state.update_input(&raw));
    }

    pub fn remove(&self, id: TodoId) {
        self.state.update(|state| {
            if state.remove_item(id) {
                debug!(target: "APP", "Removed item {}", id);
            }
        });
    }

    pub fn reorder(&self, sort: SortEnd) {
        self.state.update(|state| match state.reorder(sort.old_index, sort.new_index) {
            Ok(()) => debug!(target: "DND", "Moved {} -> {}", sort.old_index, sort.new_index),
            Err(err) => warn!(target: "DND", "Ignoring reorder: {}", err),
        });
    }

    pub fn clear_all(&self) {
        self.state.update(|state| state.clear_all());
        debug!(target: "APP", "Cleared list");
    }
}
