//! Route guard decision and page-level restriction helpers.
//!
//! The guard gates on authentication only. Ban and role checks are separate
//! helpers that individual pages opt into.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::identity::Identity;
use crate::store::{SessionPhase, SessionState};
use crate::{BANNED_PATH, DASHBOARD_PATH, LOGIN_PATH};

/// What a guarded route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity still unknown: render a placeholder, never redirect.
    Pending,
    /// Navigate away to the given path.
    Redirect(&'static str),
    /// Render the protected subtree.
    Render,
}

#[must_use]
pub fn decide(state: &SessionState) -> GuardDecision {
    match state.phase {
        SessionPhase::Resolving => GuardDecision::Pending,
        SessionPhase::Anonymous => GuardDecision::Redirect(LOGIN_PATH),
        SessionPhase::Authenticated => GuardDecision::Render,
    }
}

/// Where a page at `path` should send `identity`, if anywhere.
///
/// Banned accounts may only see the appeal page; active accounts have no
/// business on it.
#[must_use]
pub fn restricted_redirect(identity: &Identity, path: &str) -> Option<&'static str> {
    let on_banned_page = path == BANNED_PATH;
    match (identity.is_banned(), on_banned_page) {
        (true, false) => Some(BANNED_PATH),
        (false, true) => Some(DASHBOARD_PATH),
        _ => None,
    }
}

/// Login and registration views bounce an authenticated session to the dashboard.
#[must_use]
pub fn public_redirect(state: &SessionState) -> Option<&'static str> {
    state.is_authenticated().then_some(DASHBOARD_PATH)
}
