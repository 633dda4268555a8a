//! Ban-appeal models: the user's appeal form and the admin review queue.
//!
//! DESIGN
//! ======
//! Filtering, sorting and counting run on the page's copy of the last
//! `GET /admin/appeals` response; nothing here talks to the network.

#[cfg(test)]
#[path = "appeals_test.rs"]
mod appeals_test;

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::net::types::{Appeal, AppealPayload, AppealStatus};
use crate::util::time::parse_timestamp;

/// Admin decision on a pending appeal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppealAction {
    Approve,
    Reject,
}

impl AppealAction {
    /// Endpoint segment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    /// Reply prefilled in the decision modal.
    pub fn default_reply(self) -> &'static str {
        match self {
            Self::Approve => "Appeal approved",
            Self::Reject => "Appeal rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
        }
    }

    pub fn success_notice(self) -> &'static str {
        match self {
            Self::Approve => "Appeal approved. The account has been reactivated.",
            Self::Reject => "Appeal rejected.",
        }
    }
}

/// Reply text to send, or the reason it cannot be sent.
pub fn validate_reply(reply: &str) -> Result<String, &'static str> {
    let reply = reply.trim();
    if reply.is_empty() {
        return Err("Please enter a reply for the user.");
    }
    Ok(reply.to_owned())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppealStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn appeal_stats(appeals: &[Appeal]) -> AppealStats {
    let count = |status: AppealStatus| appeals.iter().filter(|a| a.status == status).count();
    AppealStats {
        total: appeals.len(),
        pending: count(AppealStatus::Pending),
        approved: count(AppealStatus::Approved),
        rejected: count(AppealStatus::Rejected),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppealSort {
    #[default]
    Newest,
    Oldest,
    /// Pending first, otherwise server order.
    Pending,
}

impl AppealSort {
    pub const ALL: [Self; 3] = [Self::Newest, Self::Oldest, Self::Pending];

    pub fn value(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::Pending => "Pending first",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.value() == value).unwrap_or_default()
    }
}

/// `None` shows every status.
pub fn status_filter_from_value(value: &str) -> Option<AppealStatus> {
    match value {
        "pending" => Some(AppealStatus::Pending),
        "approved" => Some(AppealStatus::Approved),
        "rejected" => Some(AppealStatus::Rejected),
        _ => None,
    }
}

fn matches_search(appeal: &Appeal, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(needle));
    let user = appeal.user.as_ref();
    contains(user.and_then(|u| u.name.as_deref()))
        || contains(user.and_then(|u| u.email.as_deref()))
        || contains(appeal.appeal_reason.as_deref())
}

/// Search over user name, email and reason (case-insensitive), then status, then sort.
pub fn filter_appeals(
    appeals: &[Appeal],
    search: &str,
    status: Option<AppealStatus>,
    sort: AppealSort,
) -> Vec<Appeal> {
    let needle = search.trim().to_lowercase();
    let mut out: Vec<Appeal> = appeals
        .iter()
        .filter(|a| matches_search(a, &needle))
        .filter(|a| status.is_none_or(|s| a.status == s))
        .cloned()
        .collect();

    let created = |a: &Appeal| a.created_at.as_deref().and_then(parse_timestamp);
    match sort {
        AppealSort::Newest => out.sort_by_key(|a| Reverse(created(a))),
        AppealSort::Oldest => out.sort_by_key(created),
        AppealSort::Pending => out.sort_by_key(|a| a.status != AppealStatus::Pending),
    }
    out
}

/// The banned user's appeal draft (persisted across reloads).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppealForm {
    pub appeal_reason: String,
    pub appeal_evidence: String,
    pub message: String,
}

impl AppealForm {
    /// Build the request body. `message` falls back to the reason; blank
    /// evidence is sent as `null`.
    pub fn to_payload(&self) -> Result<AppealPayload, &'static str> {
        let reason = self.appeal_reason.trim();
        if reason.is_empty() {
            return Err("Please explain why your account should be reactivated.");
        }
        let message = match self.message.trim() {
            "" => reason,
            message => message,
        };
        let evidence = self.appeal_evidence.trim();
        Ok(AppealPayload {
            message: message.to_owned(),
            appeal_reason: reason.to_owned(),
            appeal_evidence: (!evidence.is_empty()).then(|| evidence.to_owned()),
        })
    }
}

/// Whether the user already has an appeal waiting for review.
pub fn has_pending(appeals: &[Appeal]) -> bool {
    appeals.iter().any(|a| a.status == AppealStatus::Pending)
}
