//! Signed-in landing page with the one-time welcome toast.
//!
//! SYSTEM CONTEXT
//! ==============
//! First route after login. Banned accounts are sent to the appeal page;
//! everyone else gets a greeting, a short bundle overview and, right after a
//! fresh login, a welcome toast that hides itself.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::components::stat_card::StatCard;
use crate::components::toast::{Toast, WELCOME_TOAST, flash};
use crate::net::api;
use crate::state::auth::Session;
use crate::util::auth::{PageAccess, install_page_redirect};
use crate::util::remote::use_remote;

#[component]
pub fn DashboardPage(session: Session) -> impl IntoView {
    install_page_redirect(session, PageAccess::Restricted(session::DASHBOARD_PATH), use_navigate());

    let welcome = RwSignal::new(false);
    Effect::new(move || {
        if session.take_welcome_flag() {
            flash(welcome, WELCOME_TOAST);
        }
    });

    let bundles = use_remote(
        || (),
        move |()| async move {
            let store = session.store();
            api::user_bundles(store.client()).await
        },
    );

    let name = move || session.identity().map(|i| i.name).unwrap_or_default();
    let welcome_message = Signal::derive(move || format!("Welcome back, {}!", name()));
    let bundle_count = Signal::derive(move || bundles.ready_or("-".to_owned(), |b| b.len().to_string()));

    view! {
        <Layout session=session>
            <Toast visible=welcome message=welcome_message />
            <section class="dashboard-page">
                <h1 class="dashboard-page__title">{move || format!("Hello, {}", name())}</h1>
                <div class="dashboard-page__stats">
                    <StatCard label="Bundles" value=bundle_count />
                </div>
                <Show when=move || bundles.with(|r| r.error().is_some())>
                    <p class="dashboard-page__error">"Could not load your bundles."</p>
                </Show>
                <ul class="dashboard-page__bundles">
                    {move || {
                        bundles
                            .ready_or(Vec::new(), Clone::clone)
                            .into_iter()
                            .map(|b| {
                                let links = b.links_count.unwrap_or(0);
                                view! {
                                    <li class="bundle-row">
                                        <span class="bundle-row__title">{b.display_title().to_owned()}</span>
                                        <span class="bundle-row__meta">{format!("{links} links")}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <A href="/analytics" attr:class="btn">"View analytics"</A>
            </section>
        </Layout>
    }
}
