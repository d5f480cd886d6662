//! Form Feedback Components
//!
//! Remaining-characters counter and the validation error banner.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::view_model::{counter_text, error_banner};

#[component]
pub fn CharCounter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="chars-left">{move || ctx.state.with(|state| counter_text(state.form()))}</div>
    }
}

/// Shown only while the form is invalid
#[component]
pub fn FormErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.state.with(|state| error_banner(state.form())).map(|message| view! {
            <div class="form-error">{message}</div>
        })}
    }
}
