//! Forgot-password page: request a reset link by email.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::field_error::FieldError;
use crate::state::context::AppContext;
use crate::util::forms::{FieldErrors, validate_forgot_password_input};
use crate::util::guard::LOGIN_PATH;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ctx = AppContext::expect();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let sent = RwSignal::new(false);
    let busy = move || ctx.session.with(|s| s.loading());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if ctx.session.with_untracked(|s| s.loading()) {
            return;
        }
        let address = match validate_forgot_password_input(&email.get_untracked()) {
            Ok(address) => {
                errors.set(FieldErrors::new());
                address
            }
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        ctx.set_loading(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::state::notice::NoticeKind;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::request_password_reset(&address).await {
                    Ok(()) => {
                        ctx.set_loading(false);
                        sent.set(true);
                        ctx.notify(NoticeKind::Success, "If the address is registered, a reset link is on its way.");
                    }
                    Err(err) => {
                        if let Some(target) = ctx.handle_api_error(&err) {
                            navigate(target, NavigateOptions::default());
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = address;
        }
    };

    view! {
        <div class="login-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1>"Reset password"</h1>
                <Show
                    when=move || !sent.get()
                    fallback=|| view! { <p class="auth-card__info">"Check your inbox for the reset link."</p> }
                >
                    <label class="auth-card__label">
                        "Email"
                        <input
                            class="auth-card__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError errors=errors field="email"/>
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        "Send reset link"
                    </button>
                </Show>
                <a class="auth-card__link" href=LOGIN_PATH>"Back to sign in"</a>
            </form>
        </div>
    }
}
