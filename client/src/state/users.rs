//! Admin user-directory model: stats, filters and sort order.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::cmp::Reverse;

use session::Role;

use crate::net::types::AdminUser;
use crate::util::time::parse_timestamp;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub banned: usize,
    pub admins: usize,
    /// Share of active accounts, rounded; 0 for an empty directory.
    pub activity_percent: u32,
}

pub fn user_stats(users: &[AdminUser]) -> UserStats {
    let total = users.len();
    let active = users.iter().filter(|u| u.is_active).count();
    let admins = users.iter().filter(|u| u.role == Role::Admin).count();
    let activity_percent = if total == 0 {
        0
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let percent = ((active as f64 / total as f64) * 100.0).round() as u32;
        percent
    };
    UserStats { total, active, banned: total - active, admins, activity_percent }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Banned,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Banned];

    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Banned => "banned",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All statuses",
            Self::Active => "Active",
            Self::Banned => "Banned",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.value() == value).unwrap_or_default()
    }

    fn admits(self, user: &AdminUser) -> bool {
        match self {
            Self::All => true,
            Self::Active => user.is_active,
            Self::Banned => !user.is_active,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Admin,
    User,
}

impl RoleFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Admin, Self::User];

    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All roles",
            Self::Admin => "Admins",
            Self::User => "Users",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.value() == value).unwrap_or_default()
    }

    fn admits(self, user: &AdminUser) -> bool {
        match self {
            Self::All => true,
            Self::Admin => user.role == Role::Admin,
            Self::User => user.role == Role::User,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserSort {
    #[default]
    Newest,
    Oldest,
    Name,
    /// Active accounts first.
    Active,
}

impl UserSort {
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::Name, Self::Active];

    pub fn value(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Name => "name",
            Self::Active => "active",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::Name => "Name",
            Self::Active => "Active first",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.value() == value).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub search: String,
    pub status: StatusFilter,
    pub role: RoleFilter,
    pub sort: UserSort,
}

fn matches_search(user: &AdminUser, needle: &str) -> bool {
    needle.is_empty()
        || user.name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
        || user.username.as_deref().is_some_and(|u| u.to_lowercase().contains(needle))
}

pub fn filter_users(users: &[AdminUser], filters: &UserFilters) -> Vec<AdminUser> {
    let needle = filters.search.trim().to_lowercase();
    let mut out: Vec<AdminUser> = users
        .iter()
        .filter(|u| matches_search(u, &needle) && filters.status.admits(u) && filters.role.admits(u))
        .cloned()
        .collect();

    let created = |u: &AdminUser| u.created_at.as_deref().and_then(parse_timestamp);
    match filters.sort {
        UserSort::Newest => out.sort_by_key(|u| Reverse(created(u))),
        UserSort::Oldest => out.sort_by_key(created),
        UserSort::Name => out.sort_by_cached_key(|u| u.name.to_lowercase()),
        UserSort::Active => out.sort_by_key(|u| !u.is_active),
    }
    out
}

/// Admin accounts get no activate/deactivate controls.
pub fn can_moderate(user: &AdminUser) -> bool {
    user.role != Role::Admin
}

/// Confirmation prompt before changing a user's status.
pub fn status_change_prompt(activate: bool) -> &'static str {
    if activate {
        "Are you sure you want to activate this user?"
    } else {
        "Are you sure you want to deactivate this user?"
    }
}

/// Alert shown after a status change attempt.
pub fn status_change_notice(activate: bool, succeeded: bool) -> &'static str {
    match (activate, succeeded) {
        (true, true) => "User activated.",
        (false, true) => "User deactivated.",
        (true, false) => "Failed to activate user.",
        (false, false) => "Failed to deactivate user.",
    }
}
