//! Transient notices that hide themselves.

use std::time::Duration;

use leptos::prelude::*;

/// Welcome toast after login.
pub const WELCOME_TOAST: Duration = Duration::from_secs(4);
/// Appeal-submitted banner.
pub const APPEAL_BANNER: Duration = Duration::from_secs(3);

/// Show `visible` now and hide it again after `duration`.
pub fn flash(visible: RwSignal<bool>, duration: Duration) {
    visible.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(duration).await;
        visible.try_set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = duration;
}

#[component]
pub fn Toast(visible: RwSignal<bool>, #[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="toast" role="status">
                <span class="toast__message">{move || message.get()}</span>
                <button class="toast__close" on:click=move |_| visible.set(false) aria-label="Dismiss">
                    "×"
                </button>
            </div>
        </Show>
    }
}
