//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::toast::Toast;
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, landing::LandingPage, login::LoginPage,
    not_found::NotFoundPage,
};
use crate::state::context::AppContext;
use crate::util::dark_mode;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the `AppContext` and sets up client-side routing. Every route
/// except the landing page sits behind `Guarded`, including the fallback.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::new(Arc::new(BrowserStorage));
    ctx.provide();

    Effect::new(move || dark_mode::apply(ctx.session.with(|s| s.theme())));

    view! {
        <Stylesheet id="leptos" href="/pkg/weatherdesk.css"/>
        <Title text="WeatherDesk Admin"/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <Guarded><NotFoundPage/></Guarded> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                    <Route
                        path=StaticSegment("forgot-password")
                        view=|| view! { <Guarded><ForgotPasswordPage/></Guarded> }
                    />
                    <Route path=StaticSegment("dashboard") view=|| view! { <Guarded><DashboardPage/></Guarded> }/>
                </Routes>
            </main>
            <Toast/>
        </Router>
    }
}
