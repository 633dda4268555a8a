//! Authentication gate for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every page that needs a signed-in user. It waits while the session
//! resolves, sends anonymous visitors to `/login`, and otherwise renders its
//! children untouched. Ban and role checks are left to the pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::GuardDecision;
use session::guard;

use crate::state::auth::Session;

#[component]
pub fn RouteGuard(session: Session, children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    let decision = Memo::new(move |_| session.with_state(guard::decide));

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="route-guard">
                        <p class="route-guard__message">
                            {move || match decision.get() {
                                GuardDecision::Pending => "Loading...",
                                _ => "Redirecting to login...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
