//! Route wrapper that applies the route guard on every location change.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::context::AppContext;
use crate::util::guard::{RouteDecision, evaluate};

/// Render `children` only when the guard allows the current path.
///
/// The decision is made client-side, since the session lives in browser
/// storage; server renders show the pending placeholder.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let ctx = AppContext::expect();
    let location = use_location();
    let navigate = use_navigate();
    let decision = RwSignal::new(None::<RouteDecision>);

    Effect::new(move || {
        let path = location.pathname.get();
        // Re-run when the session logs in or out.
        let _ = ctx.session.with(|s| s.session().is_authenticated());

        let mut next_store = ctx.session.get_untracked();
        let next = evaluate(&path, &mut next_store);
        let changed = ctx.session.with_untracked(|current| {
            current.session() != next_store.session() || current.is_hydrated() != next_store.is_hydrated()
        });
        if changed {
            ctx.session.set(next_store);
        }

        decision.set(Some(next));
        if let Some(target) = next.redirect_target() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == Some(RouteDecision::Render)
            fallback=|| view! { <div class="route-pending" aria-busy="true"></div> }
        >
            {children()}
        </Show>
    }
}
