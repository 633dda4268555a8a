//! Client-side session lifecycle for the link page front-end.
//!
//! This crate owns everything that decides "who is signed in": the persisted
//! bearer token, the credential-bearing request layer, the session store state
//! machine, the route guard decision, and the federated login callback. It has
//! no browser dependency; the `client` crate supplies `localStorage` and
//! `gloo-net` implementations of [`PersistentStore`] and [`Transport`].

pub mod callback;
pub mod error;
pub mod guard;
pub mod identity;
pub mod request;
pub mod storage;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ApiError, ApiResult};
pub use guard::GuardDecision;
pub use identity::{Identity, Role};
pub use request::{ApiClient, ApiRequest, ApiResponse, Method, Transport};
pub use storage::{MemoryStore, PersistentStore};
pub use store::{Credentials, RegisterOutcome, Registration, SessionPhase, SessionState, SessionStore};

/// Route of the login view.
pub const LOGIN_PATH: &str = "/login";
/// Route of the authenticated landing view.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Route of the ban-appeal view.
pub const BANNED_PATH: &str = "/banned";
