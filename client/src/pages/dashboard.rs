//! Dashboard page: analytics widgets and active weather alerts.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatCard;
use crate::components::top_bar::TopBar;
use crate::net::types::DashboardSummary;
use crate::state::context::AppContext;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = AppContext::expect();
    let navigate = use_navigate();

    // Summary resource, fetched on mount.
    let summary = LocalResource::new(move || {
        let token = ctx.access_token_untracked();
        async move {
            ctx.set_loading(true);
            let result = crate::net::api::fetch_dashboard_summary(token).await;
            match &result {
                Ok(_) => ctx.set_loading(false),
                Err(err) => ctx.session.update(|s| s.apply_failure(&err.outcome())),
            }
            result
        }
    });

    // State changes already happened in the resource; this only reports and navigates.
    Effect::new(move || {
        if let Some(Err(err)) = summary.get() {
            if let Some(target) = ctx.report_api_error(&err) {
                navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });

    let data = move || summary.get().and_then(Result::ok).unwrap_or_default();
    let count = move |pick: fn(&DashboardSummary) -> u64| Signal::derive(move || pick(&data()).to_string());

    view! {
        <div class="dashboard-page">
            <TopBar/>
            <section class="dashboard-page__stats">
                <StatCard label="Users" value=count(|s| s.total_users)/>
                <StatCard label="Active users" value=count(|s| s.active_users)/>
                <StatCard label="Pending articles" value=count(|s| s.pending_articles)/>
                <StatCard label="Published articles" value=count(|s| s.published_articles)/>
                <StatCard label="Notifications sent" value=count(|s| s.notifications_sent)/>
            </section>
            <section class="dashboard-page__alerts">
                <h2>"Active alerts"</h2>
                <Suspense fallback=move || view! { <p>"Loading alerts..."</p> }>
                    {move || {
                        summary
                            .get()
                            .map(|result| {
                                let alerts = result.map(|s| s.active_alerts).unwrap_or_default();
                                if alerts.is_empty() {
                                    view! { <p class="dashboard-page__empty">"No active alerts."</p> }.into_any()
                                } else {
                                    view! {
                                        <ul class="alert-list">
                                            {alerts
                                                .into_iter()
                                                .map(|a| {
                                                    let class = format!(
                                                        "alert-list__item alert-list__item--{}",
                                                        a.severity.css_modifier(),
                                                    );
                                                    view! {
                                                        <li class=class>
                                                            <strong>{a.region}</strong>
                                                            " · "
                                                            {a.headline}
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
