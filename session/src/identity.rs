//! The signed-in user's record as returned by the backend.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Account role. Unknown roles deserialize as [`Role::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
    #[serde(other)]
    Other,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Other => "other",
        }
    }
}

/// The resolved user behind a session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// `false` means the account is banned.
    #[serde(default = "default_active", deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    #[serde(default)]
    pub ban_message: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[must_use]
    pub fn is_banned(&self) -> bool {
        !self.is_active
    }
}

fn default_active() -> bool {
    true
}

/// The identity endpoint answers in one of three shapes.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum IdentityPayload {
    Wrapped { user: Identity },
    Data { data: Identity },
    Bare(Identity),
}

impl IdentityPayload {
    pub(crate) fn into_identity(self) -> Identity {
        match self {
            Self::Wrapped { user } | Self::Data { data: user } | Self::Bare(user) => user,
        }
    }
}

/// Accept numeric or string identifiers and normalize to `String`.
///
/// # Errors
///
/// Fails when the value is neither a JSON number nor a string.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected id, got {other}"))),
    }
}

/// Like [`deserialize_id`], but `null` reads as `None`.
///
/// # Errors
///
/// Fails when the value is neither null, a JSON number nor a string.
pub fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected id, got {other}"))),
    }
}

/// Accept `true`/`false`, `1`/`0`, or `"1"`/`"0"` for boolean flags.
///
/// # Errors
///
/// Fails for any other JSON value.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_i64().is_some_and(|v| v != 0)),
        Value::String(s) => match s.as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            _ => Err(D::Error::custom(format!("expected flag, got {s:?}"))),
        },
        other => Err(D::Error::custom(format!("expected flag, got {other}"))),
    }
}
