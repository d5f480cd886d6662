//! Todo List View Component
//!
//! Sortable list of to-dos, or the empty-state message.
//! Reordering comes from leptos-dragdrop as (old_index, new_index).

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::view_model::{ListView, EMPTY_STATE_MESSAGE};

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Create DnD signals
    let dnd = create_sort_signals();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |sort_end| ctx.reorder(sort_end));

    let is_empty = Memo::new(move |_| ctx.items.with(|items| items.is_empty()));
    let rows = move || match ctx.items.with(|items| ListView::from_items(items)) {
        ListView::Rows(rows) => rows,
        ListView::Empty(_) => Vec::new(),
    };

    view! {
        <Show
            when=move || !is_empty.get()
            fallback=|| view! { <div class="no-todos">{EMPTY_STATE_MESSAGE}</div> }
        >
            <ul class="todo-list" on:mouseleave=make_on_list_mouseleave(dnd)>
                <For
                    each=rows
                    // Index is part of the key so handlers are rebuilt after a move
                    key=|row| (row.id, row.index, row.title.clone())
                    children=move |row| view! { <TodoRow row=row dnd=dnd /> }
                />
            </ul>
        </Show>
    }
}
