//! Colored status pills for appeals and accounts.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::AppealStatus;

pub fn appeal_badge_class(status: AppealStatus) -> &'static str {
    match status {
        AppealStatus::Pending => "badge badge--pending",
        AppealStatus::Approved => "badge badge--approved",
        AppealStatus::Rejected => "badge badge--rejected",
    }
}

pub fn account_badge(active: bool) -> (&'static str, &'static str) {
    if active { ("badge badge--approved", "Active") } else { ("badge badge--rejected", "Banned") }
}

#[component]
pub fn AppealBadge(status: AppealStatus) -> impl IntoView {
    view! { <span class=appeal_badge_class(status)>{status.label()}</span> }
}

#[component]
pub fn AccountBadge(active: bool) -> impl IntoView {
    let (class, label) = account_badge(active);
    view! { <span class=class>{label}</span> }
}
