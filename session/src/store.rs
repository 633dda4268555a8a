//! Session store: single source of truth for "who is signed in".
//!
//! LIFECYCLE
//! =========
//! `Resolving` (boot, identity unknown) → `Authenticated` when the stored token
//! is accepted by `GET /user`, or `Anonymous` when there is no token or the
//! request fails. Logout ends in `Anonymous` whatever the network says, unless
//! a sign-in lands while its request is in flight.
//! Login and registration push a server-confirmed identity in directly via
//! [`SessionStore::sign_in`] without a second resolution.
//!
//! Each transition replaces the whole [`SessionState`] and is published to
//! subscribers. An operation that started before a newer one (for example a
//! slow boot resolution or logout overtaken by a login) does not publish its
//! outcome. Listeners may subscribe further listeners; those see the next
//! transition, not the one being delivered.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::identity::{Identity, IdentityPayload};
use crate::request::{ApiClient, Method, Transport};
use crate::storage::{JUST_LOGGED_IN_KEY, PersistentStore, TOKEN_KEY};

pub const IDENTITY_ENDPOINT: &str = "/user";
pub const LOGIN_ENDPOINT: &str = "/login";
pub const REGISTER_ENDPOINT: &str = "/register";
pub const LOGOUT_ENDPOINT: &str = "/logout";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Resolving,
    Authenticated,
    Anonymous,
}

/// Observable session snapshot. `identity` is `Some` exactly when
/// `phase == Authenticated`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub identity: Option<Identity>,
}

impl SessionState {
    #[must_use]
    pub fn resolving() -> Self {
        Self { phase: SessionPhase::Resolving, identity: None }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { phase: SessionPhase::Anonymous, identity: None }
    }

    #[must_use]
    pub fn authenticated(identity: Identity) -> Self {
        Self { phase: SessionPhase::Authenticated, identity: Some(identity) }
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.phase == SessionPhase::Resolving
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }
}

#[derive(Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
struct TokenGrant {
    token: String,
    user: Identity,
}

#[derive(Deserialize)]
struct RegisterReply {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<serde_json::Value>,
}

/// What a successful registration led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The backend issued a token; the session is now authenticated.
    SignedIn(Identity),
    /// Account created; the user still has to log in.
    Created,
}

type Listener = Rc<dyn Fn(&SessionState)>;

pub struct SessionStore<S, T> {
    storage: S,
    client: ApiClient<T>,
    state: RefCell<SessionState>,
    listeners: RefCell<Vec<Listener>>,
    epoch: Cell<u64>,
}

impl<S: PersistentStore, T: Transport> SessionStore<S, T> {
    /// Build a store in the `Resolving` state. A token already in storage is
    /// attached to the request layer immediately.
    pub fn new(storage: S, client: ApiClient<T>) -> Self {
        if let Some(token) = storage.get(TOKEN_KEY) {
            client.set_token(&token);
        }
        Self {
            storage,
            client,
            state: RefCell::new(SessionState::resolving()),
            listeners: RefCell::new(Vec::new()),
            epoch: Cell::new(0),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a callback invoked with every new state.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Resolve the stored token into an identity.
    ///
    /// Exactly one `GET /user` when a token exists, none otherwise. A failed
    /// request discards the token and removes the credential.
    pub async fn resolve(&self) -> SessionPhase {
        let epoch = self.begin();
        self.publish(SessionState::resolving());

        let Some(token) = self.storage.get(TOKEN_KEY) else {
            self.client.clear_token();
            self.publish(SessionState::anonymous());
            return SessionPhase::Anonymous;
        };
        self.client.set_token(&token);

        let result = self.client.get::<IdentityPayload>(IDENTITY_ENDPOINT).await;
        if self.epoch.get() != epoch {
            log::debug!("session resolution superseded");
            return self.state.borrow().phase;
        }
        match result {
            Ok(payload) => {
                self.publish(SessionState::authenticated(payload.into_identity()));
                SessionPhase::Authenticated
            }
            Err(err) => {
                log::warn!("failed to load user: {err}");
                self.discard_token();
                self.publish(SessionState::anonymous());
                SessionPhase::Anonymous
            }
        }
    }

    /// Best-effort `POST /logout`, then local cleanup.
    ///
    /// Cleanup is skipped when a newer operation (a sign-in) ran while the
    /// request was in flight.
    pub async fn logout(&self) {
        let epoch = self.begin();
        if let Err(err) = self.client.execute(Method::Post, LOGOUT_ENDPOINT, None).await {
            log::warn!("logout error: {err}");
        }
        if self.epoch.get() != epoch {
            log::debug!("logout superseded");
            return;
        }
        self.discard_token();
        self.publish(SessionState::anonymous());
    }

    /// Adopt a server-confirmed identity without re-resolving.
    pub fn sign_in(&self, token: &str, identity: Identity) {
        self.begin();
        self.adopt_token(token);
        self.storage.set(JUST_LOGGED_IN_KEY, "true");
        self.publish(SessionState::authenticated(identity));
    }

    /// Persist `token` and attach it to the request layer.
    pub fn adopt_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
        self.client.set_token(token);
    }

    /// `POST /login`; on success the returned identity becomes current.
    ///
    /// # Errors
    ///
    /// Any [`crate::ApiError`] from the request; the session is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Identity> {
        let grant: TokenGrant = self
            .client
            .post(LOGIN_ENDPOINT, &Credentials { email, password })
            .await?;
        self.sign_in(&grant.token, grant.user.clone());
        Ok(grant.user)
    }

    /// `POST /register`. Signs in when the backend also issues a token.
    ///
    /// # Errors
    ///
    /// Any [`crate::ApiError`] from the request.
    pub async fn register(&self, form: &Registration<'_>) -> ApiResult<RegisterOutcome> {
        let reply: Option<RegisterReply> = self.client.post(REGISTER_ENDPOINT, form).await?;
        let grant = reply.and_then(|r| {
            let user = serde_json::from_value::<Identity>(r.user?).ok()?;
            Some((r.token?, user))
        });
        match grant {
            Some((token, user)) => {
                self.sign_in(&token, user.clone());
                Ok(RegisterOutcome::SignedIn(user))
            }
            None => Ok(RegisterOutcome::Created),
        }
    }

    /// Mark that a login just completed (welcome toast).
    pub fn mark_just_logged_in(&self) {
        self.storage.set(JUST_LOGGED_IN_KEY, "true");
    }

    /// Read and clear the one-shot "just logged in" flag.
    pub fn take_welcome_flag(&self) -> bool {
        let set = self.storage.get(JUST_LOGGED_IN_KEY).is_some_and(|v| v == "true");
        if set {
            self.storage.remove(JUST_LOGGED_IN_KEY);
        }
        set
    }

    fn begin(&self) -> u64 {
        let next = self.epoch.get().wrapping_add(1);
        self.epoch.set(next);
        next
    }

    fn discard_token(&self) {
        self.storage.remove(TOKEN_KEY);
        self.client.clear_token();
    }

    fn publish(&self, next: SessionState) {
        *self.state.borrow_mut() = next.clone();
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(&next);
        }
    }
}
