//! Single-number analytics widget.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
        </div>
    }
}
