//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{ApiError, RegisterOutcome};

use crate::state::auth::{RegistrationForm, Session};
use crate::util::auth::{PageAccess, install_page_redirect};

const REGISTERED: &str = "Registration successful. Please sign in.";

fn validate_registration(form: &RegistrationForm) -> Result<RegistrationForm, &'static str> {
    let trimmed = RegistrationForm {
        name: form.name.trim().to_owned(),
        username: form.username.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
    };
    if trimmed.name.is_empty() || trimmed.username.is_empty() || trimmed.email.is_empty() || trimmed.password.is_empty() {
        return Err("Fill in every field.");
    }
    Ok(trimmed)
}

/// "Registration failed. " followed by the backend's reason.
fn registration_failure(err: &ApiError) -> String {
    format!("Registration failed. {}", err.user_message("Please try again."))
}

/// Where to go after a successful registration.
fn registration_target(outcome: &RegisterOutcome) -> &'static str {
    match outcome {
        RegisterOutcome::SignedIn(_) => session::DASHBOARD_PATH,
        RegisterOutcome::Created => session::LOGIN_PATH,
    }
}

#[component]
pub fn RegisterPage(session: Session) -> impl IntoView {
    let navigate = use_navigate();
    install_page_redirect(session, PageAccess::Public, navigate.clone());

    let form = RwSignal::new(RegistrationForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_registration(&form.get()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.register(input).await {
                    Ok(outcome) => {
                        if outcome == RegisterOutcome::Created {
                            crate::util::notify::alert(REGISTERED);
                        }
                        navigate(
                            registration_target(&outcome),
                            NavigateOptions { replace: true, ..NavigateOptions::default() },
                        );
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        crate::util::notify::alert(&registration_failure(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (input, &navigate, NavigateOptions::default(), REGISTERED);
    };

    let field = move |placeholder: &'static str, kind: &'static str, get: fn(&RegistrationForm) -> String, set: fn(&mut RegistrationForm, String)| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {field("Full name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                    {field("Username", "text", |f| f.username.clone(), |f, v| f.username = v)}
                    {field("you@example.com", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
