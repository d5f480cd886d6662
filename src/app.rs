//! To-Do Widget App
//!
//! Root component: loads the saved list, provides context, persists
//! every change of the list.

use leptos::prelude::*;

use crate::components::{CharCounter, ClearAllButton, FormErrorBanner, TodoForm, TodoListView};
use crate::config::WidgetConfig;
use crate::context::AppContext;
use crate::state::TodoState;
use crate::storage::{LocalStorage, StorageBridge};

#[component]
pub fn App() -> impl IntoView {
    let config = WidgetConfig::default();
    let bridge = StorageBridge::new(LocalStorage, &config);

    // State
    let state = RwSignal::new(TodoState::new(bridge.load(), &config));
    let ctx = AppContext::new(state);

    // Provide context to all children
    provide_context(ctx);

    // Save after every list change; form keystrokes don't touch `items`
    Effect::new(move |_| {
        ctx.items.with(|items| bridge.save(items));
    });

    view! {
        <div class="c-todo-form-wrap">
            <TodoForm />
            <CharCounter />
            <FormErrorBanner />
            <TodoListView />
            <ClearAllButton />
        </div>
    }
}
