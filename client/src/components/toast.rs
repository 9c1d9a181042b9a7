//! Toast host rendering the current notice.

use leptos::prelude::*;

use crate::state::context::AppContext;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = AppContext::expect();
    let notice = move || ctx.notices.with(|n| n.current().cloned());

    view! {
        {move || {
            notice()
                .map(|n| {
                    let id = n.id;
                    let class = format!("toast toast--{}", n.kind.css_modifier());
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{n.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    ctx.notices.update(|s| {
                                        s.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
