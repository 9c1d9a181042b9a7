//! Public landing page. Rendered without any session check.

use leptos::prelude::*;

use crate::util::guard::{DASHBOARD_PATH, LOGIN_PATH};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"WeatherDesk"</h1>
            <p>"Administration for the weather platform: users, articles, notifications and integrations."</p>
            <nav class="landing-page__actions">
                <a class="btn btn--primary" href=DASHBOARD_PATH>"Open dashboard"</a>
                <a class="btn" href=LOGIN_PATH>"Sign in"</a>
            </nav>
        </div>
    }
}
