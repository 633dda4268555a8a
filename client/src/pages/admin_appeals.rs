//! Admin review queue for ban appeals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists every appeal with per-status counts, lets an admin search, filter
//! and sort them, and approve or reject pending ones with a reply. The list
//! is re-fetched after each decision.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::decision_modal::DecisionModal;
use crate::components::layout::Layout;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::AppealBadge;
use crate::net::api;
use crate::net::types::{Appeal, AppealStatus};
use crate::state::appeals::{AppealAction, AppealSort, appeal_stats, filter_appeals, status_filter_from_value};
use crate::state::auth::Session;
use crate::util::auth::{PageAccess, install_page_redirect};
use crate::util::avatar::avatar_url;
use crate::util::remote::use_remote;
use crate::util::time::{long_label, relative_label};

const STATUS_OPTIONS: [(&str, &str); 4] =
    [("all", "All statuses"), ("pending", "Pending"), ("approved", "Approved"), ("rejected", "Rejected")];

#[component]
pub fn AdminAppealsPage(session: Session) -> impl IntoView {
    install_page_redirect(session, PageAccess::Restricted("/admin/appeals"), use_navigate());

    let appeals = use_remote(
        || (),
        move |()| async move {
            let store = session.store();
            api::admin_appeals(store.client()).await
        },
    );

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::from("all"));
    let sort = RwSignal::new(AppealSort::default());
    let decision = RwSignal::new(None::<(Appeal, AppealAction)>);
    let busy = RwSignal::new(false);

    let stats = Memo::new(move |_| appeals.ready_or(appeal_stats(&[]), |a| appeal_stats(a)));
    let visible = Memo::new(move |_| {
        let status = status_filter_from_value(&status.get());
        let sort = sort.get();
        search.with(|needle| appeals.ready_or(Vec::new(), |a| filter_appeals(a, needle, status, sort)))
    });

    let on_close = Callback::new(move |()| {
        if !busy.get_untracked() {
            decision.set(None);
        }
    });
    let on_submit = Callback::new(move |reply: String| {
        let Some((appeal, action)) = decision.get_untracked() else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = session.store();
            match api::decide_appeal(store.client(), &appeal.id, action, &reply).await {
                Ok(()) => {
                    decision.set(None);
                    appeals.reload();
                    crate::util::notify::alert(action.success_notice());
                }
                Err(e) => {
                    log::error!("appeal {} {} failed: {e}", appeal.id, action.as_str());
                    crate::util::notify::alert(&e.user_message("Failed to process the appeal."));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (appeal, action, reply);
    });

    let count = move |pick: fn(&crate::state::appeals::AppealStats) -> usize| {
        Signal::derive(move || pick(&stats.get()).to_string())
    };

    view! {
        <Layout session=session>
            <section class="admin-page">
                <header class="admin-page__header">
                    <h1>"Ban appeals"</h1>
                    <button class="btn" on:click=move |_| appeals.reload()>"Refresh"</button>
                </header>

                <div class="admin-page__stats">
                    <StatCard label="Total" value=count(|s| s.total) />
                    <StatCard label="Pending" value=count(|s| s.pending) />
                    <StatCard label="Approved" value=count(|s| s.approved) />
                    <StatCard label="Rejected" value=count(|s| s.rejected) />
                </div>

                <div class="admin-page__filters">
                    <input
                        class="admin-page__search"
                        type="search"
                        placeholder="Search user or reason"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select class="select" prop:value=move || status.get() on:change=move |ev| status.set(event_target_value(&ev))>
                        {STATUS_OPTIONS.into_iter().map(|(value, label)| view! { <option value=value>{label}</option> }).collect_view()}
                    </select>
                    <select
                        class="select"
                        prop:value=move || sort.get().value()
                        on:change=move |ev| sort.set(AppealSort::from_value(&event_target_value(&ev)))
                    >
                        {AppealSort::ALL.into_iter().map(|s| view! { <option value=s.value()>{s.label()}</option> }).collect_view()}
                    </select>
                </div>

                {move || {
                    if appeals.loading() {
                        return view! { <p>"Loading appeals..."</p> }.into_any();
                    }
                    if let Some(message) = appeals.with(|a| a.error().map(|e| e.user_message("Failed to load appeals."))) {
                        return view! { <p class="admin-page__error">{message}</p> }.into_any();
                    }
                    let rows = visible.get();
                    if rows.is_empty() {
                        let filtered = !search.get().trim().is_empty() || status.get() != "all";
                        let text = if filtered { "No appeals match the current filters." } else { "No appeals yet." };
                        return view! { <p class="admin-page__empty">{text}</p> }.into_any();
                    }
                    let now = crate::util::time::now();
                    rows.into_iter()
                        .map(|appeal| {
                            let user = appeal.user.clone().unwrap_or_default();
                            let name = user.name.clone().unwrap_or_else(|| "Unknown user".to_owned());
                            let reason = appeal.appeal_reason.clone().or(appeal.message.clone()).unwrap_or_default();
                            let pending = appeal.status == AppealStatus::Pending;
                            let approve = appeal.clone();
                            let reject = appeal.clone();
                            view! {
                                <article class="appeal-card">
                                    <div class="appeal-card__head">
                                        <img class="avatar" src=avatar_url(user.avatar.as_deref(), &name) alt=name.clone() />
                                        <div>
                                            <strong>{name.clone()}</strong>
                                            <span class="appeal-card__email">{user.email.clone().unwrap_or_default()}</span>
                                        </div>
                                        <AppealBadge status=appeal.status />
                                        <span class="appeal-card__date" title=long_label(appeal.created_at.as_deref())>
                                            {relative_label(appeal.created_at.as_deref(), now)}
                                        </span>
                                    </div>
                                    <p class="appeal-card__reason">{reason}</p>
                                    {appeal.appeal_evidence.clone().map(|e| view! { <p class="appeal-card__evidence">"Evidence: " {e}</p> })}
                                    {user.ban_message.clone().map(|m| view! { <p class="appeal-card__ban">"Ban reason: " {m}</p> })}
                                    {appeal.admin_reply.clone().map(|r| view! { <p class="appeal-card__reply">"Reply: " {r}</p> })}
                                    <Show when=move || pending>
                                        <div class="appeal-card__actions">
                                            <button
                                                class="btn btn--primary"
                                                on:click={
                                                    let approve = approve.clone();
                                                    move |_| decision.set(Some((approve.clone(), AppealAction::Approve)))
                                                }
                                            >
                                                "Approve"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click={
                                                    let reject = reject.clone();
                                                    move |_| decision.set(Some((reject.clone(), AppealAction::Reject)))
                                                }
                                            >
                                                "Reject"
                                            </button>
                                        </div>
                                    </Show>
                                </article>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}

                {move || decision.get().map(|(appeal, action)| view! {
                    <DecisionModal appeal=appeal action=action busy=busy on_submit=on_submit on_close=on_close />
                })}
            </section>
        </Layout>
    }
}
