//! Clear All Button Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::view_model::show_clear_all;

/// "Delete all todos", hidden while the list is empty
#[component]
pub fn ClearAllButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Show when=move || ctx.items.with(|items| show_clear_all(items))>
            <button class="delete-all" on:click=move |_| ctx.clear_all()>
                "Delete all todos"
            </button>
        </Show>
    }
}
