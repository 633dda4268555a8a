//! Auth-session handle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the `session` crate's store in a reactive signal. The app root
//! creates one [`Session`] and passes it to every route and component that
//! needs identity; the store's subscription keeps the signal current.

use std::rc::Rc;

use leptos::prelude::*;
use session::{ApiClient, ApiResult, Identity, RegisterOutcome, Registration, SessionState, SessionStore};

use crate::config;
use crate::net::http::FetchTransport;
use crate::util::storage::BrowserStorage;

/// The concrete store used in the browser.
pub type BrowserSession = SessionStore<BrowserStorage, FetchTransport>;
/// The credential-bearing client pages fetch through.
pub type BrowserClient = ApiClient<FetchTransport>;

/// Copyable reactive handle to the session store.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    store: StoredValue<Rc<BrowserSession>, LocalStorage>,
}

impl Session {
    /// Build the store (attaching any stored token) in the `Resolving` state.
    pub fn new() -> Self {
        let store = Rc::new(SessionStore::new(
            BrowserStorage,
            ApiClient::with_base(FetchTransport, config::API_BASE),
        ));
        let state = RwSignal::new(store.state());
        store.subscribe(move |next| {
            state.try_set(next.clone());
        });
        Self { state, store: StoredValue::new_local(store) }
    }

    /// Current state (tracked).
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.state.with(f)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|s| s.identity.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(SessionState::loading)
    }

    pub fn store(&self) -> Rc<BrowserSession> {
        self.store.get_value()
    }

    pub async fn resolve(self) {
        let phase = self.store().resolve().await;
        log::debug!("session resolved: {phase:?}");
    }

    pub async fn logout(self) {
        self.store().logout().await;
    }

    /// # Errors
    ///
    /// The rejected login.
    pub async fn login(self, email: String, password: String) -> ApiResult<Identity> {
        self.store().login(&email, &password).await
    }

    /// # Errors
    ///
    /// The rejected registration.
    pub async fn register(self, form: RegistrationForm) -> ApiResult<RegisterOutcome> {
        let registration = Registration {
            name: &form.name,
            username: &form.username,
            email: &form.email,
            password: &form.password,
        };
        self.store().register(&registration).await
    }

    /// One-shot "just logged in" flag for the welcome toast.
    pub fn take_welcome_flag(&self) -> bool {
        self.store().take_welcome_flag()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned registration fields collected by the register page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}
