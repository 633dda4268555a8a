//! Admin user directory with activate/deactivate moderation.

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::AccountBadge;
use crate::net::types::AdminUser;
use crate::net::api;
use crate::state::auth::Session;
use crate::state::users::{
    RoleFilter, StatusFilter, UserFilters, UserSort, can_moderate, filter_users, status_change_notice,
    status_change_prompt, user_stats,
};
use crate::util::auth::{PageAccess, install_page_redirect};
use crate::util::avatar::avatar_url;
use crate::util::remote::use_remote;
use crate::util::time::{long_label, relative_label, short_label};

/// Label of the moderation button for `user`, if any.
fn moderation_label(user: &AdminUser) -> Option<&'static str> {
    can_moderate(user).then_some(if user.is_active { "Deactivate" } else { "Activate" })
}

#[component]
pub fn AdminUsersPage(session: Session) -> impl IntoView {
    install_page_redirect(session, PageAccess::Restricted("/admin/users"), use_navigate());

    let users = use_remote(
        || (),
        move |()| async move {
            let store = session.store();
            api::admin_users(store.client()).await
        },
    );

    let filters = RwSignal::new(UserFilters::default());
    let processing = RwSignal::new(None::<String>);
    let detail = RwSignal::new(None::<AdminUser>);

    let all = move || users.ready_or(Vec::new(), Clone::clone);
    let visible = Memo::new(move |_| filters.with(|f| users.ready_or(Vec::new(), |u| filter_users(u, f))));
    let stats = Memo::new(move |_| users.ready_or(user_stats(&[]), |u| user_stats(u)));

    let set_status = move |user_id: String, activate: bool| {
        if processing.get_untracked().is_some() || !crate::util::notify::confirm(status_change_prompt(activate)) {
            return;
        }
        processing.set(Some(user_id.clone()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = session.store();
            let result = api::set_user_active(store.client(), &user_id, activate).await;
            if let Err(e) = &result {
                log::error!("status change for user {user_id} failed: {e}");
            } else {
                users.reload();
            }
            crate::util::notify::alert(status_change_notice(activate, result.is_ok()));
            processing.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user_id, status_change_notice(activate, false));
    };

    view! {
        <Layout session=session>
            <section class="admin-page">
                <header class="admin-page__header">
                    <h1>"Users"</h1>
                    <button class="btn" on:click=move |_| users.reload()>"Refresh"</button>
                </header>

                <div class="admin-page__stats">
                    <StatCard label="Total users" value=Signal::derive(move || stats.get().total.to_string()) />
                    <StatCard label="Active" value=Signal::derive(move || stats.get().active.to_string()) />
                    <StatCard label="Banned" value=Signal::derive(move || stats.get().banned.to_string()) />
                    <StatCard label="Admins" value=Signal::derive(move || stats.get().admins.to_string()) />
                    <StatCard
                        label="Activity"
                        value=Signal::derive(move || format!("{}%", stats.get().activity_percent))
                        hint="share of active accounts"
                    />
                </div>

                <div class="admin-page__filters">
                    <input
                        class="admin-page__search"
                        type="search"
                        placeholder="Search name, email or username"
                        prop:value=move || filters.with(|f| f.search.clone())
                        on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                    />
                    <select
                        class="select"
                        prop:value=move || filters.with(|f| f.status.value())
                        on:change=move |ev| filters.update(|f| f.status = StatusFilter::from_value(&event_target_value(&ev)))
                    >
                        {StatusFilter::ALL.into_iter().map(|s| view! { <option value=s.value()>{s.label()}</option> }).collect_view()}
                    </select>
                    <select
                        class="select"
                        prop:value=move || filters.with(|f| f.role.value())
                        on:change=move |ev| filters.update(|f| f.role = RoleFilter::from_value(&event_target_value(&ev)))
                    >
                        {RoleFilter::ALL.into_iter().map(|r| view! { <option value=r.value()>{r.label()}</option> }).collect_view()}
                    </select>
                    <select
                        class="select"
                        prop:value=move || filters.with(|f| f.sort.value())
                        on:change=move |ev| filters.update(|f| f.sort = UserSort::from_value(&event_target_value(&ev)))
                    >
                        {UserSort::ALL.into_iter().map(|s| view! { <option value=s.value()>{s.label()}</option> }).collect_view()}
                    </select>
                </div>

                {move || {
                    if users.loading() {
                        return view! { <p>"Loading users..."</p> }.into_any();
                    }
                    if let Some(message) = users.with(|u| u.error().map(|e| e.user_message("Failed to load users."))) {
                        return view! { <p class="admin-page__error">{message}</p> }.into_any();
                    }
                    let rows = visible.get();
                    if rows.is_empty() {
                        return view! { <p class="admin-page__empty">"No users match the current filters."</p> }.into_any();
                    }
                    view! {
                        <p class="admin-page__count">{format!("{} of {} users", rows.len(), all().len())}</p>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"User"</th>
                                    <th>"Role"</th>
                                    <th>"Status"</th>
                                    <th>"Joined"</th>
                                    <th>"Last active"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|user| {
                                        let id = user.id.clone();
                                        let activate = !user.is_active;
                                        let label = moderation_label(&user);
                                        let busy_id = id.clone();
                                        let detail_user = user.clone();
                                        let button_class = if activate { "btn btn--primary" } else { "btn btn--danger" };
                                        view! {
                                            <tr>
                                                <td class="admin-table__user">
                                                    <img class="avatar" src=avatar_url(user.avatar.as_deref(), &user.name) alt=user.name.clone() />
                                                    <span>{user.name.clone()}</span>
                                                    <span class="admin-table__email">{user.email.clone()}</span>
                                                </td>
                                                <td>{user.role.as_str()}</td>
                                                <td><AccountBadge active=user.is_active /></td>
                                                <td>{short_label(user.created_at.as_deref())}</td>
                                                <td>{relative_label(user.last_active.as_deref(), crate::util::time::now())}</td>
                                                <td class="admin-table__actions">
                                                    <button class="btn btn--link" on:click=move |_| detail.set(Some(detail_user.clone()))>
                                                        "Details"
                                                    </button>
                                                    {label.map(|label| {
                                                        let id = id.clone();
                                                        view! {
                                                            <button
                                                                class=button_class
                                                                disabled=move || processing.get().as_deref() == Some(busy_id.as_str())
                                                                on:click=move |_| set_status(id.clone(), activate)
                                                            >
                                                                {label}
                                                            </button>
                                                        }
                                                    })}
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

                {move || detail.get().map(|user| view! {
                    <div class="dialog-backdrop" on:click=move |_| detail.set(None)>
                        <div class="dialog dialog--profile" on:click=|ev| ev.stop_propagation()>
                            <img class="avatar avatar--large" src=avatar_url(user.avatar.as_deref(), &user.name) alt=user.name.clone() />
                            <h2>{user.name.clone()}</h2>
                            <dl class="dialog__profile">
                                <dt>"Username"</dt>
                                <dd>{user.username.clone().map_or_else(|| "-".to_owned(), |u| format!("@{u}"))}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email.clone()}</dd>
                                <dt>"Role"</dt>
                                <dd>{user.role.as_str()}</dd>
                                <dt>"Status"</dt>
                                <dd><AccountBadge active=user.is_active /></dd>
                                <dt>"Ban reason"</dt>
                                <dd>{user.ban_message.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                                <dt>"Joined"</dt>
                                <dd>{long_label(user.created_at.as_deref())}</dd>
                                <dt>"Last active"</dt>
                                <dd>{long_label(user.last_active.as_deref())}</dd>
                            </dl>
                            <button class="btn" on:click=move |_| detail.set(None)>"Close"</button>
                        </div>
                    </div>
                })}
            </section>
        </Layout>
    }
}
