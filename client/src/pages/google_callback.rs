//! Landing route for the backend's Google OAuth redirect (`?token=...`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::Session;

#[component]
pub fn GoogleCallbackPage(session: Session) -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();
    let token = query.with_untracked(|q| q.get("token"));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let store = session.store();
        let target = session::callback::complete_federated_login(&store, token.as_deref()).await;
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, token, navigate, NavigateOptions::default());

    view! {
        <div class="login-page">
            <div class="login-card">
                <p class="login-message">"Completing Google sign-in..."</p>
            </div>
        </div>
    }
}
