//! Session domain record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DateField, User};
use crate::error::WireError;
use crate::mapper;

/// Lifecycle state reported by the backend.
///
/// Unknown states are kept in [`SessionState::Other`] so they survive a
/// read/write round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionState {
    /// Session in use.
    Active,
    /// Session closed by the user or an administrator.
    Inactive,
    /// Session past its expiration.
    Expired,
    /// Any other state string.
    Other(String),
}

impl SessionState {
    /// Returns the wire spelling of the state.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Expired => "expired",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for SessionState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "expired" => Self::Expired,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for SessionState {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<SessionState> for String {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated session of a user (n:1 with [`User`]).
///
/// Every field is optional: the same type serves full records read from the
/// backend and partial records used for create/update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    /// Opaque session identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Authentication token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Expiration instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateField>,
    /// Two-factor code, under its legacy key on both sides.
    #[serde(rename = "FACode", skip_serializing_if = "Option::is_none")]
    pub fa_code: Option<String>,
    /// Lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SessionState>,
    /// Creation time, assigned by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateField>,
    /// Last update time, assigned by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateField>,
    /// Embedded user in wire form, untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<serde_json::Value>,
}

impl Session {
    /// Maps the embedded user with the [`User`] mapper.
    ///
    /// Returns `None` when no user is embedded.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Decode`] if the embedded record does not fit the
    /// user wire shape.
    pub fn embedded_user(&self) -> Option<Result<User, WireError>> {
        self.user.clone().map(mapper::decode::<User>)
    }
}
