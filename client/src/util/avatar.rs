//! Avatar URL resolution.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use crate::config;

const GENERATED_AVATAR: &str = "https://ui-avatars.com/api/";

/// Resolve a stored avatar value into an image URL.
///
/// Empty values fall back to a generated initials image for `name`; absolute
/// URLs pass through; bare file names live under the backend's storage.
pub fn avatar_url(avatar: Option<&str>, name: &str) -> String {
    match avatar.map(str::trim).filter(|a| !a.is_empty()) {
        None => generated_avatar(name),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.to_owned(),
        Some(file) => {
            let file = file.trim_start_matches('/').trim_start_matches("avatars/");
            config::backend_url(&format!("/storage/avatars/{file}"))
        }
    }
}

fn generated_avatar(name: &str) -> String {
    let name = if name.trim().is_empty() { "User" } else { name.trim() };
    format!(
        "{GENERATED_AVATAR}?name={}&background=6366f1&color=fff&bold=true",
        urlencoding::encode(name)
    )
}
