use leptos::prelude::*;

use crate::util::guard::DASHBOARD_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <a href=DASHBOARD_PATH>"Back to dashboard"</a>
        </div>
    }
}
