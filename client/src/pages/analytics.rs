//! Click analytics for the signed-in user's bundles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Four independent reads (stats, bundles, bundle views, link clicks) run
//! concurrently on mount; each fills its own slot. Filters only re-derive
//! figures from what was fetched.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::{Bundle, ClickLog};
use crate::state::analytics::{
    ActivityKind, Growth, TimeRange, average_per_bundle, click_through_rate, filter_logs, recent_activity,
    top_bundles, top_locations, weekly_growth,
};
use crate::state::auth::Session;
use crate::util::auth::{PageAccess, install_page_redirect};
use crate::util::remote::use_remote;
use crate::util::time::{long_label, now};

fn growth_label(growth: Growth) -> String {
    let arrow = if growth.positive { "▲" } else { "▼" };
    format!("{arrow} {}% vs last week", growth.percent)
}

#[component]
pub fn AnalyticsPage(session: Session) -> impl IntoView {
    install_page_redirect(session, PageAccess::Restricted("/analytics"), use_navigate());

    let stats = use_remote(
        || (),
        move |()| async move { api::user_stats(session.store().client()).await },
    );
    let bundles = use_remote(
        || (),
        move |()| async move { api::user_bundles(session.store().client()).await },
    );
    let bundle_logs = use_remote(
        || (),
        move |()| async move { api::bundle_click_logs(session.store().client()).await },
    );
    let link_logs = use_remote(
        || (),
        move |()| async move { api::link_click_logs(session.store().client()).await },
    );

    let selected_bundle = RwSignal::new(String::from("all"));
    let range = RwSignal::new(TimeRange::default());

    let all_bundles = move || bundles.ready_or(Vec::<Bundle>::new(), Clone::clone);
    let scoped = move |logs: Vec<ClickLog>| {
        let selected = selected_bundle.get();
        let bundle = (selected != "all").then_some(selected.as_str());
        filter_logs(&logs, bundle, range.get(), now())
    };
    let views = Memo::new(move |_| scoped(bundle_logs.ready_or(Vec::new(), Clone::clone)));
    let clicks = Memo::new(move |_| scoped(link_logs.ready_or(Vec::new(), Clone::clone)));

    let loading = move || stats.loading() || bundles.loading() || bundle_logs.loading() || link_logs.loading();

    let total_views = Signal::derive(move || views.with(Vec::len).to_string());
    let total_clicks = Signal::derive(move || clicks.with(Vec::len).to_string());
    let bundle_total = Signal::derive(move || bundles.ready_or(0, Vec::len).to_string());
    let ctr = Signal::derive(move || format!("{:.1}%", click_through_rate(views.with(Vec::len), clicks.with(Vec::len))));
    let view_growth = move || growth_label(bundle_logs.ready_or(Growth { percent: 0, positive: true }, |l| weekly_growth(l, now())));
    let click_growth = move || growth_label(link_logs.ready_or(Growth { percent: 0, positive: true }, |l| weekly_growth(l, now())));

    view! {
        <Layout session=session>
            <section class="analytics-page">
                <header class="analytics-page__header">
                    <h1>"Analytics"</h1>
                    <div class="analytics-page__filters">
                        <select
                            class="select"
                            prop:value=move || selected_bundle.get()
                            on:change=move |ev| selected_bundle.set(event_target_value(&ev))
                        >
                            <option value="all">"All bundles"</option>
                            {move || {
                                all_bundles()
                                    .into_iter()
                                    .map(|b| view! { <option value=b.id.clone()>{b.display_title().to_owned()}</option> })
                                    .collect_view()
                            }}
                        </select>
                        <select
                            class="select"
                            prop:value=move || range.get().value()
                            on:change=move |ev| range.set(TimeRange::from_value(&event_target_value(&ev)))
                        >
                            {TimeRange::ALL
                                .into_iter()
                                .map(|r| view! { <option value=r.value()>{r.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </header>

                <Show when=move || !loading() fallback=|| view! { <p>"Loading analytics..."</p> }>
                    <Show when=move || stats.with(|s| s.error().is_some())>
                        <p class="analytics-page__error">"Some analytics could not be loaded."</p>
                    </Show>
                    <div class="analytics-page__stats">
                        <StatCard label="Bundle views" value=total_views />
                        <StatCard label="Link clicks" value=total_clicks />
                        <StatCard label="Total bundles" value=bundle_total />
                        <StatCard label="Click-through rate" value=ctr />
                    </div>
                    <p class="analytics-page__growth">
                        <span>"Views: " {view_growth}</span>
                        <span>"Clicks: " {click_growth}</span>
                    </p>

                    <div class="analytics-page__grid">
                        <section class="panel">
                            <h2>"Top performing bundles"</h2>
                            {move || {
                                let ranked = stats.ready_or(Vec::new(), |s| top_bundles(&all_bundles(), s));
                                if ranked.is_empty() {
                                    return view! { <p class="panel__empty">"No data available"</p> }.into_any();
                                }
                                ranked
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, ranked)| {
                                        let id = ranked.bundle.id.clone();
                                        let bundle_views = views.with(|v| v.iter().filter(|l| l.bundle_id.as_deref() == Some(id.as_str())).count());
                                        let bundle_clicks = clicks.with(|c| c.iter().filter(|l| l.bundle_id.as_deref() == Some(id.as_str())).count());
                                        view! {
                                            <div class="ranked-row">
                                                <span class="ranked-row__rank">{format!("#{}", index + 1)}</span>
                                                <span class="ranked-row__title">{ranked.bundle.display_title().to_owned()}</span>
                                                <span class="ranked-row__meta">
                                                    {format!("{} total clicks · {bundle_views} views · {bundle_clicks} link clicks", ranked.clicks)}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </section>

                        <section class="panel">
                            <h2>"Recent activity"</h2>
                            {move || {
                                let recent = views.with(|v| clicks.with(|c| recent_activity(v, c, &all_bundles())));
                                if recent.is_empty() {
                                    return view! { <p class="panel__empty">"No recent activity"</p> }.into_any();
                                }
                                recent
                                    .into_iter()
                                    .map(|activity| {
                                        let what = match activity.kind {
                                            ActivityKind::View => "Bundle viewed",
                                            ActivityKind::Click => "Link clicked",
                                        };
                                        let title = activity.bundle_title.unwrap_or_else(|| "Unknown bundle".to_owned());
                                        view! {
                                            <div class="activity-row">
                                                <span class="activity-row__kind">{what}</span>
                                                <span class="activity-row__title">{title}</span>
                                                <span class="activity-row__date">{long_label(activity.log.created_at.as_deref())}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </section>

                        <section class="panel panel--accent">
                            <h2>"Quick stats"</h2>
                            <dl class="quick-stats">
                                <dt>"Average views per bundle"</dt>
                                <dd>{move || average_per_bundle(views.with(Vec::len), bundles.ready_or(0, Vec::len))}</dd>
                                <dt>"Average clicks per bundle"</dt>
                                <dd>{move || average_per_bundle(clicks.with(Vec::len), bundles.ready_or(0, Vec::len))}</dd>
                                <dt>"Total interactions"</dt>
                                <dd>{move || views.with(Vec::len) + clicks.with(Vec::len)}</dd>
                            </dl>
                        </section>

                        <section class="panel">
                            <h2>"Top locations"</h2>
                            {move || {
                                let top = views.with(|v| clicks.with(|c| top_locations(v.iter().chain(c))));
                                if top.is_empty() {
                                    return view! { <p class="panel__empty">"No visitors yet"</p> }.into_any();
                                }
                                top.into_iter()
                                    .map(|(ip, count)| view! {
                                        <div class="location-row">
                                            <code>{ip}</code>
                                            <span>{format!("{count} visits")}</span>
                                        </div>
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </section>
                    </div>
                </Show>
            </section>
        </Layout>
    }
}
