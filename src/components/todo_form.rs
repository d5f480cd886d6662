//! Todo Form Component
//!
//! Text input and submit button for new to-dos.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="todo-form h-clearfix" on:submit=on_submit>
            <input
                id="title"
                type="text"
                placeholder="What do you need to do?"
                prop:value=move || ctx.state.with(|state| state.form().value().to_string())
                on:input=move |ev| {
                    ctx.update_input(event_target_value(&ev));
                    // prop:value skips unchanged strings, so undo an over-limit keystroke here
                    let value = ctx.state.with_untracked(|state| state.form().value().to_string());
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    if input.value() != value {
                        input.set_value(&value);
                    }
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
