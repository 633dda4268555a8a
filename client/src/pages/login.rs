//! Login page supporting email + password and Google sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use session::callback::login_error_notice;

use crate::config;
use crate::state::auth::Session;
use crate::util::auth::{PageAccess, install_page_redirect};

const LOGIN_FAILED: &str = "Login failed. Check your email and password.";

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage(session: Session) -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();
    install_page_redirect(session, PageAccess::Public, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let notice = move || query.with(|q| login_error_notice(q.get("error").as_deref()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
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
                match session.login(email_value, password_value).await {
                    Ok(_) => navigate(session::DASHBOARD_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() }),
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        crate::util::notify::alert(LOGIN_FAILED);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, &navigate, NavigateOptions::default(), LOGIN_FAILED);
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&config::google_redirect_url());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"LinkPage"</h1>
                <p class="login-card__subtitle">"Sign in to manage your links"</p>
                {move || notice().map(|n| view! { <p class="login-message login-message--error">{n}</p> })}
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                <a href=config::google_redirect_url() class="login-button login-button--google" on:click=on_google>
                    "Sign in with Google"
                </a>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
