//! Appeal page for deactivated accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Banned identities are redirected here from every other page; active ones
//! are sent back to the dashboard. The page shows the ban reason, collects an
//! appeal (the draft survives reloads) and lists earlier appeals with the
//! admin's replies.

#[cfg(test)]
#[path = "banned_test.rs"]
mod banned_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::Identity;

use crate::components::status_badge::AppealBadge;
use crate::net::api;
use crate::state::appeals::{AppealForm, has_pending};
use crate::state::auth::Session;
use crate::util::auth::{PageAccess, install_page_redirect};
use crate::util::remote::use_remote;
use crate::util::storage::{load_json, save_json};
use crate::util::time::long_label;

const DRAFT_KEY: &str = "appealDraft";
const DEFAULT_BAN_NOTICE: &str = "Your account has been deactivated by an administrator.";

fn ban_notice(identity: Option<&Identity>) -> String {
    identity
        .and_then(|i| i.ban_message.as_deref())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_BAN_NOTICE)
        .to_owned()
}

#[component]
pub fn BannedPage(session: Session) -> impl IntoView {
    let navigate = use_navigate();
    install_page_redirect(session, PageAccess::Restricted(session::BANNED_PATH), navigate.clone());

    let form = RwSignal::new(load_json::<AppealForm>(DRAFT_KEY).unwrap_or_default());
    Effect::new(move |_| save_json(DRAFT_KEY, &form.get()));

    let busy = RwSignal::new(false);
    let submitted = RwSignal::new(false);
    let show_history = RwSignal::new(true);

    let history = use_remote(
        || (),
        move |()| async move {
            let store = session.store();
            api::user_appeals(store.client()).await
        },
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match form.get().to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                crate::util::notify::alert(message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = session.store();
            match api::submit_appeal(store.client(), &payload).await {
                Ok(()) => {
                    form.set(AppealForm::default());
                    crate::util::storage::forget(DRAFT_KEY);
                    crate::components::toast::flash(submitted, crate::components::toast::APPEAL_BANNER);
                    history.reload();
                }
                Err(e) => {
                    log::error!("appeal submission failed: {e}");
                    crate::util::notify::alert(&e.user_message("Failed to submit appeal."));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                session.logout().await;
                navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, NavigateOptions::default());
    };

    let pending = move || history.ready_or(false, |appeals| has_pending(appeals));

    view! {
        <div class="banned-page">
            <header class="banned-page__header">
                <h1>"Account Deactivated"</h1>
                <p class="banned-page__notice">{move || ban_notice(session.identity().as_ref())}</p>
                <button class="btn banned-page__logout" on:click=on_logout>"Logout"</button>
            </header>

            <Show when=move || submitted.get()>
                <p class="banner banner--success" role="status">
                    "Your appeal was submitted. An administrator will review it."
                </p>
            </Show>

            <section class="banned-page__form">
                <h2>"Submit an appeal"</h2>
                <Show when=pending>
                    <p class="banner banner--info">"You already have an appeal waiting for review."</p>
                </Show>
                <form class="appeal-form" on:submit=on_submit>
                    <label for="appeal-reason">"Why should your account be reactivated? *"</label>
                    <textarea
                        id="appeal-reason"
                        rows="4"
                        required
                        prop:value=move || form.with(|f| f.appeal_reason.clone())
                        on:input=move |ev| form.update(|f| f.appeal_reason = event_target_value(&ev))
                    ></textarea>
                    <label for="appeal-evidence">"Supporting evidence (link or details)"</label>
                    <input
                        id="appeal-evidence"
                        type="text"
                        prop:value=move || form.with(|f| f.appeal_evidence.clone())
                        on:input=move |ev| form.update(|f| f.appeal_evidence = event_target_value(&ev))
                    />
                    <label for="appeal-message">"Additional message"</label>
                    <textarea
                        id="appeal-message"
                        rows="3"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Submit Appeal" }}
                    </button>
                </form>
            </section>

            <section class="banned-page__history">
                <button class="btn btn--link" on:click=move |_| show_history.update(|s| *s = !*s)>
                    {move || if show_history.get() { "Hide appeal history" } else { "Show appeal history" }}
                </button>
                <Show when=move || show_history.get()>
                    {move || {
                        if history.loading() {
                            return view! { <p>"Loading appeals..."</p> }.into_any();
                        }
                        let appeals = history.ready_or(Vec::new(), Clone::clone);
                        if appeals.is_empty() {
                            return view! { <p class="banned-page__empty">"No appeals yet."</p> }.into_any();
                        }
                        appeals
                            .into_iter()
                            .map(|appeal| {
                                let reason = appeal.appeal_reason.clone().or(appeal.message.clone()).unwrap_or_default();
                                view! {
                                    <article class="appeal-card">
                                        <div class="appeal-card__head">
                                            <AppealBadge status=appeal.status />
                                            <span class="appeal-card__date">{long_label(appeal.created_at.as_deref())}</span>
                                        </div>
                                        <p class="appeal-card__reason">{reason}</p>
                                        {appeal.admin_reply.map(|reply| view! {
                                            <p class="appeal-card__reply">"Admin reply: " {reply}</p>
                                        })}
                                    </article>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </Show>
            </section>
        </div>
    }
}
