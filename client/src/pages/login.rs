//! Login page: email + password form with inline validation.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::state::context::AppContext;
use crate::util::forms::{FieldErrors, validate_login_input};
use crate::util::guard::FORGOT_PASSWORD_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = AppContext::expect();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let form_error = RwSignal::new(None::<String>);
    let busy = move || ctx.session.with(|s| s.loading());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if ctx.session.with_untracked(|s| s.loading()) {
            return;
        }
        form_error.set(None);
        let input = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => {
                errors.set(FieldErrors::new());
                input
            }
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        ctx.set_loading(true);

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            use crate::net::error::ApiError;
            use crate::util::guard::DASHBOARD_PATH;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&input).await {
                    Ok(record) => {
                        ctx.session.update(|s| {
                            s.login(record);
                            s.set_loading(false);
                        });
                        navigate(DASHBOARD_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(err) => {
                        if err == ApiError::InvalidCredentials {
                            form_error.set(Some(err.to_string()));
                        }
                        if let Some(target) = ctx.handle_api_error(&err) {
                            navigate(target, NavigateOptions::default());
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1>"WeatherDesk Admin"</h1>
                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-card__input"
                        type="email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="email"/>
                <label class="auth-card__label">
                    "Password"
                    <input
                        class="auth-card__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <FieldError errors=errors field="password"/>
                <Show when=move || form_error.get().is_some()>
                    <p class="auth-card__error" role="alert">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=busy>
                    {move || if busy() { "Signing in..." } else { "Sign in" }}
                </button>
                <a class="auth-card__link" href=FORGOT_PASSWORD_PATH>"Forgot password?"</a>
            </form>
        </div>
    }
}
