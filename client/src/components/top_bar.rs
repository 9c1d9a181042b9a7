//! Dashboard header: signed-in user, theme toggle, sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::context::AppContext;
use crate::state::session::Theme;
use crate::util::guard::LOGIN_PATH;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = AppContext::expect();
    let navigate = use_navigate();

    let user_label = move || {
        ctx.session.with(|s| {
            let session = s.session();
            session
                .field("name")
                .and_then(|v| v.as_str().map(ToOwned::to_owned))
                .or_else(|| session.user_id().map(ToOwned::to_owned))
                .unwrap_or_default()
        })
    };
    let theme_label = move || match ctx.session.with(|s| s.theme()) {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    let on_toggle_theme = move |_| {
        ctx.session.update(|s| {
            s.toggle_theme();
        });
    };
    let on_sign_out = move |_| {
        ctx.sign_out();
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <header class="top-bar">
            <span class="top-bar__brand">"WeatherDesk"</span>
            <span class="top-bar__user">{user_label}</span>
            <button class="btn" on:click=on_toggle_theme>{theme_label}</button>
            <button class="btn btn--ghost" on:click=on_sign_out>"Sign out"</button>
        </header>
    }
}
