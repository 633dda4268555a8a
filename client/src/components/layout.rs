//! Page chrome: top navigation bar and content frame.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use session::Identity;

use crate::state::auth::Session;
use crate::util::avatar::avatar_url;

/// Navigation entries for `identity`; admins also get the moderation console.
pub fn nav_links(identity: Option<&Identity>) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("/dashboard", "Dashboard"), ("/analytics", "Analytics")];
    if identity.is_some_and(Identity::is_admin) {
        links.extend([("/admin/users", "Users"), ("/admin/appeals", "Appeals"), ("/admin/bundles", "Bundles")]);
    }
    links
}

#[component]
pub fn Layout(session: Session, children: Children) -> impl IntoView {
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
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

    let name = move || session.identity().map(|i| i.name).unwrap_or_default();
    let avatar = move || {
        session
            .identity()
            .map(|i| avatar_url(i.avatar.as_deref(), &i.name))
            .unwrap_or_default()
    };

    view! {
        <div class="layout">
            <header class="navbar">
                <span class="navbar__brand">"LinkPage"</span>
                <nav class="navbar__links">
                    {move || {
                        nav_links(session.identity().as_ref())
                            .into_iter()
                            .map(|(href, label)| view! { <A href=href attr:class="navbar__link">{label}</A> })
                            .collect_view()
                    }}
                </nav>
                <span class="navbar__spacer"></span>
                <img class="navbar__avatar" src=avatar alt=name />
                <span class="navbar__name">{name}</span>
                <button class="btn navbar__logout" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            </header>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
