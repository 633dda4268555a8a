//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages apply identical redirect behavior on top of the route guard: login
//! and registration bounce signed-in users, regular pages send banned
//! accounts to the appeal page, and the appeal page sends active accounts home.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::SessionState;
use session::guard;

use crate::state::auth::Session;

/// Which redirect rule a page opts into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAccess {
    /// Login and registration.
    Public,
    /// A guarded page mounted at the given path.
    Restricted(&'static str),
}

/// Where `state` should be sent from a page with `access`, if anywhere.
pub fn redirect_target(state: &SessionState, access: PageAccess) -> Option<&'static str> {
    match access {
        PageAccess::Public => guard::public_redirect(state),
        PageAccess::Restricted(path) => {
            let identity = state.identity.as_ref()?;
            guard::restricted_redirect(identity, path)
        }
    }
}

/// Navigate (replacing history) whenever the session calls for it.
pub fn install_page_redirect<F>(session: Session, access: PageAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = session.with_state(|state| redirect_target(state, access));
        if let Some(target) = target {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
