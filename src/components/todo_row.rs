//! Todo Row Component
//!
//! One list entry: drag handle with its position, title, delete button.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_handle_mousedown, make_on_item_mouseenter, SortSignals};

use crate::context::AppContext;
use crate::view_model::RowView;

#[component]
pub fn TodoRow(row: RowView, dnd: SortSignals) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = row.id;
    let index = row.index;

    // Visual state
    let is_dragging = move || dnd.dragging_index_read.get() == Some(index);
    let is_drop_target = move || {
        dnd.dragging_index_read.get().is_some_and(|dragged| dragged != index)
            && dnd.over_index_read.get() == Some(index)
    };
    let row_class = move || {
        let mut c = String::from("g-sortable-item");
        if is_dragging() { c.push_str(" moving-item"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    view! {
        <li class=row_class on:mouseenter=make_on_item_mouseenter(dnd, index)>
            <span class="list-order-number" on:mousedown=make_on_handle_mousedown(dnd, index)>
                {row.position}
            </span>
            {row.title}
            <button
                class="remove-todo"
                on:click=move |_| {
                    // A drop that ends over the button is not a click
                    if dnd.drag_just_ended_read.get_untracked() { return; }
                    ctx.remove(id);
                }
            >
                <i class="fa fa-trash" aria-hidden="true"></i>
            </button>
        </li>
    }
}
