//! User wire record and the records of its relations.

use serde::{Deserialize, Serialize};

use crate::domain::RecordId;

/// User as exchanged with the backend. Relations may be embedded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserWire {
    /// User identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login e-mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Plain password, only ever sent on login or registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Embedded [`AddressWire`]. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<serde_json::Value>,
    /// Embedded profile. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<serde_json::Value>,
    /// Embedded [`PasswordWire`] list. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passwords: Option<serde_json::Value>,
    /// Embedded [`UserRoleWire`] list. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_roles: Option<serde_json::Value>,
    /// Embedded session list. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<serde_json::Value>,
}

/// Postal address with coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressWire {
    /// Address identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// House number, kept as text (`"12B"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Latitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Owning user, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Stored password with its validity window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordWire {
    /// Password identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Password content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Start of validity (ISO-8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    /// End of validity (ISO-8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
    /// Owning user, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Join record between a user and a role, with a membership window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRoleWire {
    /// UUID string on current backends, integer on older ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Start of membership (ISO-8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    /// End of membership (ISO-8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
    /// Member user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Granted role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    /// Embedded user. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<serde_json::Value>,
    /// Embedded role. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<serde_json::Value>,
}
