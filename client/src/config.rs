//! Compile-time front-end configuration.
//!
//! Both values can be overridden at build time through environment variables
//! so the same sources serve local development and deployed builds.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Path prefix (or absolute URL) of the REST backend.
pub const API_BASE: &str = match option_env!("LINKPAGE_API_BASE") {
    Some(base) => base,
    None => session::request::DEFAULT_API_BASE,
};

/// Origin of the backend, used for full-page navigations and stored files.
pub const BACKEND_ORIGIN: &str = match option_env!("LINKPAGE_BACKEND_ORIGIN") {
    Some(origin) => origin,
    None => "http://localhost:8000",
};

/// Backend URL that starts the Google OAuth flow.
pub fn google_redirect_url() -> String {
    backend_url("/api/auth/google/redirect")
}

/// Join `path` onto [`BACKEND_ORIGIN`].
pub fn backend_url(path: &str) -> String {
    format!("{}/{}", BACKEND_ORIGIN.trim_end_matches('/'), path.trim_start_matches('/'))
}
