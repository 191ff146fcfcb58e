//! Session wire record.

use serde::{Deserialize, Serialize};

/// Session as exchanged with `/sessions` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionWire {
    /// Opaque session identifier (UUID string on the backend).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Authentication token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Expiration instant (ISO-8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    /// Two-factor code. The backend spells this key `FACode`.
    #[serde(rename = "FACode", skip_serializing_if = "Option::is_none")]
    pub fa_code: Option<String>,
    /// Session state (`active`, `inactive`, `expired`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Server-assigned creation time (ISO-8601). Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Server-assigned update time (ISO-8601). Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Embedded user, when the backend includes it. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<serde_json::Value>,
}
