//! Approve/reject dialog for a pending ban appeal.

use leptos::prelude::*;

use crate::net::types::Appeal;
use crate::state::appeals::{AppealAction, validate_reply};

/// Reply dialog, prefilled with the action's default reply. An empty reply
/// blocks submission.
#[component]
pub fn DecisionModal(
    appeal: Appeal,
    action: AppealAction,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let reply = RwSignal::new(action.default_reply().to_owned());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        match validate_reply(&reply.get_untracked()) {
            Ok(text) => {
                error.set(None);
                on_submit.run(text);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let who = appeal
        .user
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_else(|| "Unknown user".to_owned());
    let reason = appeal.appeal_reason.clone().or(appeal.message.clone()).unwrap_or_default();
    let evidence = appeal.appeal_evidence.clone();
    let confirm_class = match action {
        AppealAction::Approve => "btn btn--primary",
        AppealAction::Reject => "btn btn--danger",
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--decision"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{format!("{} appeal", action.label())}</h2>
                <p class="dialog__subject">{who}</p>
                <p class="dialog__reason">{reason}</p>
                {evidence.map(|e| view! { <p class="dialog__evidence">"Evidence: " {e}</p> })}
                <label class="dialog__label" for="admin-reply">"Reply to the user"</label>
                <textarea
                    id="admin-reply"
                    class="dialog__input"
                    rows="4"
                    prop:value=move || reply.get()
                    on:input=move |ev| reply.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(()) disabled=move || busy.get()>
                        "Cancel"
                    </button>
                    <button
                        class=confirm_class
                        on:click=move |_| submit()
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Saving..." } else { action.label() }}
                    </button>
                </div>
            </div>
        </div>
    }
}
