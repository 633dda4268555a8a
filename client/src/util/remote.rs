//! Page-scoped data fetching.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page owns its collections. `use_remote` runs a fetch whenever its
//! reactive inputs change (or `reload` is called) and exposes the outcome as a
//! [`Remote`] signal.
//!
//! DESIGN
//! ======
//! Each run takes a new generation number; a completion is published only if
//! its generation is still current. Superseded fetches and fetches finishing
//! after the page unmounted (the generation cell is disposed with the owner)
//! are dropped.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::*;
use session::{ApiError, ApiResult};

/// Outcome of the latest fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> Remote<T> {
    pub fn from_result(result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Ticket counter deciding which fetch may publish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// Start a new fetch; every earlier ticket becomes stale.
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

/// Whether a fetch holding `ticket` may still publish. False once superseded
/// or once the owning page (and with it `generation`) is gone.
pub fn accepts(generation: StoredValue<Generation>, ticket: u64) -> bool {
    generation.try_with_value(|g| g.is_current(ticket)).unwrap_or(false)
}

/// Reactive handle returned by [`use_remote`].
pub struct RemoteData<T: Send + Sync + 'static> {
    state: RwSignal<Remote<T>>,
    reload: Trigger,
}

impl<T: Send + Sync + 'static> Clone for RemoteData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteData<T> {}

impl<T: Send + Sync + 'static> RemoteData<T> {
    /// Read the current outcome (tracked).
    pub fn with<R>(&self, f: impl FnOnce(&Remote<T>) -> R) -> R {
        self.state.with(f)
    }

    pub fn loading(&self) -> bool {
        self.with(Remote::is_loading)
    }

    /// Read the loaded value, or `fallback` while loading or failed.
    pub fn ready_or<R>(&self, fallback: R, f: impl FnOnce(&T) -> R) -> R {
        self.with(|remote| remote.ready().map_or(fallback, f))
    }

    /// Fetch again with the current inputs.
    pub fn reload(&self) {
        self.reload.notify();
    }
}

/// Fetch with `fetch(deps())` now and whenever `deps` or a reload changes.
pub fn use_remote<D, T, F, Fut>(deps: impl Fn() -> D + 'static, fetch: F) -> RemoteData<T>
where
    D: 'static,
    T: Send + Sync + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let state = RwSignal::new(Remote::Loading);
    let reload = Trigger::new();
    let generation = StoredValue::new(Generation::default());

    Effect::new(move || {
        reload.track();
        let input = deps();
        let Some(current) = generation.try_update_value(Generation::begin) else {
            return;
        };
        state.set(Remote::Loading);

        #[cfg(feature = "hydrate")]
        {
            let pending = fetch(input);
            leptos::task::spawn_local(async move {
                let result = pending.await;
                if !accepts(generation, current) {
                    log::debug!("dropping stale fetch result (generation {current})");
                    return;
                }
                if let Err(err) = &result {
                    log::warn!("fetch failed: {err}");
                }
                state.try_set(Remote::from_result(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, current, &fetch);
        }
    });

    RemoteData { state, reload }
}
