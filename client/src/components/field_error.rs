//! Inline validation message for a single form field.

use leptos::prelude::*;

use crate::util::forms::FieldErrors;

#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field));
    view! {
        <Show when=move || message().is_some()>
            <p class="field-error" role="alert">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}
