//! Native browser dialogs.
//!
//! Page actions report failures with `alert` and ask before destructive
//! moderation with `confirm`. Outside the browser both are inert; `confirm`
//! answers `false` so nothing destructive runs during server rendering.

pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
    #[cfg(not(feature = "hydrate"))]
    log::info!("alert: {message}");
}

pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
