//! Profile wire record.

use serde::{Deserialize, Serialize};

/// Profile as exchanged with the backend (1:1 with a user).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileWire {
    /// Profile identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Owning user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Photo path relative to the API (e.g. `profiles/uuid_file.png`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Server-assigned creation time. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Server-assigned update time. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
