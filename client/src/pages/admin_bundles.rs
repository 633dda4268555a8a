//! Admin bundle browser: paginated listing, owner filter, search, delete.

#[cfg(test)]
#[path = "admin_bundles_test.rs"]
mod admin_bundles_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::ApiResult;

use crate::components::layout::Layout;
use crate::components::pagination::Pagination;
use crate::net::api;
use crate::net::types::{Ack, Bundle, Paginated};
use crate::state::auth::{BrowserClient, Session};
use crate::state::bundles::{BundleScope, DELETE_PROMPT, filter_bundles};
use crate::util::auth::{PageAccess, install_page_redirect};
use crate::util::remote::use_remote;
use crate::util::time::short_label;

async fn load_scope(client: &BrowserClient, scope: BundleScope) -> ApiResult<Paginated<Bundle>> {
    match scope {
        BundleScope::All { page } => api::admin_bundles(client, page).await,
        BundleScope::Owner { user_id } => {
            let data = api::admin_user_bundles(client, &user_id).await?;
            Ok(owner_page(data))
        }
    }
}

/// An owner's full bundle list presented as a single page.
fn owner_page(data: Vec<Bundle>) -> Paginated<Bundle> {
    let total = data.len() as u64;
    Paginated { data, total, ..Paginated::default() }
}

/// Alert text for a delete reply; `None` means it succeeded.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn delete_failure(result: &ApiResult<Ack>) -> Option<String> {
    match result {
        Ok(ack) if ack.success => None,
        Ok(ack) => Some(ack.message.clone().unwrap_or_else(|| "Failed to delete bundle.".to_owned())),
        Err(e) => Some(e.user_message("Failed to delete bundle.")),
    }
}

#[component]
pub fn AdminBundlesPage(session: Session) -> impl IntoView {
    install_page_redirect(session, PageAccess::Restricted("/admin/bundles"), use_navigate());

    let page = RwSignal::new(1_u32);
    let owner = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let listing = use_remote(
        move || BundleScope::from_selection(&owner.get(), page.get()),
        move |scope| async move {
            let store = session.store();
            load_scope(store.client(), scope).await
        },
    );
    let owners = use_remote(
        || (),
        move |()| async move {
            let store = session.store();
            api::admin_users(store.client()).await
        },
    );

    let current = Signal::derive(move || listing.ready_or(page.get(), |p| p.current_page));
    let last = Signal::derive(move || listing.ready_or(1, |p| p.last_page));
    let on_page = Callback::new(move |next: u32| page.set(next));

    let on_delete = move |bundle_id: String| {
        if !crate::util::notify::confirm(DELETE_PROMPT) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = session.store();
            let result = api::delete_bundle(store.client(), &bundle_id).await;
            match delete_failure(&result) {
                None => {
                    crate::util::notify::alert("Bundle deleted.");
                    listing.reload();
                }
                Some(message) => {
                    log::error!("delete bundle {bundle_id} failed: {message}");
                    crate::util::notify::alert(&message);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = bundle_id;
    };

    view! {
        <Layout session=session>
            <section class="admin-page">
                <header class="admin-page__header">
                    <h1>"Bundles"</h1>
                    <span class="admin-page__count">
                        {move || listing.ready_or(String::new(), |p| format!("{} bundles", p.total))}
                    </span>
                </header>

                <div class="admin-page__filters">
                    <input
                        class="admin-page__search"
                        type="search"
                        placeholder="Search title, slug or owner"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="select"
                        prop:value=move || owner.get()
                        on:change=move |ev| {
                            owner.set(event_target_value(&ev));
                            page.set(1);
                        }
                    >
                        <option value="">"All owners"</option>
                        {move || {
                            owners
                                .ready_or(Vec::new(), Clone::clone)
                                .into_iter()
                                .map(|u| view! { <option value=u.id.clone()>{format!("{} ({})", u.name, u.email)}</option> })
                                .collect_view()
                        }}
                    </select>
                    <Show when=move || !search.get().is_empty() || !owner.get().is_empty()>
                        <button
                            class="btn btn--link"
                            on:click=move |_| {
                                search.set(String::new());
                                owner.set(String::new());
                                page.set(1);
                            }
                        >
                            "Clear filters"
                        </button>
                    </Show>
                </div>

                {move || {
                    if listing.loading() {
                        return view! { <p>"Loading bundles..."</p> }.into_any();
                    }
                    if let Some(message) = listing.with(|l| l.error().map(|e| e.user_message("Failed to load bundles."))) {
                        return view! { <p class="admin-page__error">{message}</p> }.into_any();
                    }
                    let rows = search.with(|needle| listing.ready_or(Vec::new(), |p| filter_bundles(&p.data, needle)));
                    if rows.is_empty() {
                        return view! { <p class="admin-page__empty">"No bundles found. Try adjusting your search or filter."</p> }.into_any();
                    }
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Bundle"</th>
                                    <th>"Owner"</th>
                                    <th>"Theme"</th>
                                    <th>"Links"</th>
                                    <th>"Created"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|bundle| {
                                        let id = bundle.id.clone();
                                        let owner_name = bundle.user.as_ref().and_then(|u| u.name.clone()).unwrap_or_else(|| "-".to_owned());
                                        let owner_email = bundle.user.as_ref().and_then(|u| u.email.clone()).unwrap_or_default();
                                        view! {
                                            <tr>
                                                <td>
                                                    <strong>{bundle.display_title().to_owned()}</strong>
                                                    <span class="admin-table__slug">{bundle.slug.clone().map(|s| format!("/{s}")).unwrap_or_default()}</span>
                                                </td>
                                                <td>
                                                    <span>{owner_name}</span>
                                                    <span class="admin-table__email">{owner_email}</span>
                                                </td>
                                                <td>{bundle.theme.as_ref().map(|t| t.name.clone()).unwrap_or_else(|| "default".to_owned())}</td>
                                                <td>{bundle.links_count.unwrap_or(0)}</td>
                                                <td>{short_label(bundle.created_at.as_deref())}</td>
                                                <td class="admin-table__actions">
                                                    <button class="btn btn--danger" on:click=move |_| on_delete(id.clone())>
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}

                <Pagination current=current last=last on_select=on_page />
            </section>
        </Layout>
    }
}
