//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Fields mirror the backend's JSON; anything the UI can live without is
//! optional so a sparse record never fails a whole list decode. Identifiers
//! arrive as numbers or strings and are normalized to `String`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use session::identity::{deserialize_flag, deserialize_id, deserialize_opt_id};
use session::Role;

/// A user-owned collection of links.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub links_count: Option<u64>,
    #[serde(default)]
    pub theme: Option<BundleTheme>,
    #[serde(default)]
    pub user: Option<BundleOwner>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Bundle {
    /// Title, falling back to name, then a placeholder.
    pub fn display_title(&self) -> &str {
        let present = |t: &&str| !t.trim().is_empty();
        self.title
            .as_deref()
            .filter(present)
            .or_else(|| self.name.as_deref().filter(present))
            .unwrap_or("Untitled bundle")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BundleTheme {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BundleOwner {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Laravel-style paginator payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub per_page: u32,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self { data: Vec::new(), current_page: 1, last_page: 1, total: 0, per_page: 0 }
    }
}

fn first_page() -> u32 {
    1
}

/// Ban-appeal review status.
///
/// Statuses the UI does not know (or `null`) read as `Pending`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppealStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl<'de> Deserialize<'de> for AppealStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::Pending, Self::from_wire))
    }
}

impl AppealStatus {
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Summary of the user who filed an appeal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppealUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub ban_message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A request to reverse an account ban.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appeal {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<AppealUser>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub appeal_reason: Option<String>,
    #[serde(default)]
    pub appeal_evidence: Option<String>,
    #[serde(default)]
    pub status: AppealStatus,
    #[serde(default)]
    pub admin_reply: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A user row in the admin console.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "active_by_default", deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub ban_message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_active: Option<String>,
}

fn active_by_default() -> bool {
    true
}

/// Aggregate click counters for the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickStats {
    #[serde(default)]
    pub total_bundle_clicks: u64,
    #[serde(default)]
    pub total_link_clicks: u64,
    #[serde(default)]
    pub clicks_per_bundle: HashMap<String, u64>,
}

/// One recorded bundle or link click.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClickLog {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub bundle_id: Option<String>,
    #[serde(default)]
    pub link_id: Option<serde_json::Value>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `{ "success": bool, "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /user/appeals`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppealPayload {
    pub message: String,
    pub appeal_reason: String,
    pub appeal_evidence: Option<String>,
}

/// Body of `POST /admin/appeals/{id}/approve|reject`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppealDecision {
    pub admin_reply: String,
}
