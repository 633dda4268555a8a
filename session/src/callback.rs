//! Federated (Google) login hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend finishes the OAuth dance and redirects the browser to the
//! callback route with `?token=...`. The token is stored, the session is
//! re-resolved, and the caller navigates to the returned path.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use crate::request::Transport;
use crate::storage::PersistentStore;
use crate::store::{SessionPhase, SessionStore};
use crate::DASHBOARD_PATH;

/// Query value the login view recognizes as a failed federated login.
pub const GOOGLE_FAILED: &str = "google_failed";
/// Redirect target for a failed federated login.
pub const GOOGLE_FAILED_PATH: &str = "/login?error=google_failed";

/// Complete the callback and return where to navigate (with history replace).
///
/// A missing or blank `token` issues no request.
pub async fn complete_federated_login<S, T>(store: &SessionStore<S, T>, token: Option<&str>) -> &'static str
where
    S: PersistentStore,
    T: Transport,
{
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        log::warn!("federated callback without token");
        return GOOGLE_FAILED_PATH;
    };

    store.adopt_token(token);
    match store.resolve().await {
        SessionPhase::Authenticated => {
            store.mark_just_logged_in();
            DASHBOARD_PATH
        }
        SessionPhase::Anonymous | SessionPhase::Resolving => GOOGLE_FAILED_PATH,
    }
}

/// Notice shown on the login view for an `?error=` query value.
#[must_use]
pub fn login_error_notice(error: Option<&str>) -> Option<&'static str> {
    match error? {
        GOOGLE_FAILED => Some("Google sign-in failed. Please try again."),
        _ => Some("Sign-in failed. Please try again."),
    }
}
