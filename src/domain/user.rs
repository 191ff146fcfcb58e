//! User domain record and the records of its relations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DateField, Profile, RecordId, Session};
use crate::error::WireError;
use crate::mapper::{self, WireMapped};

/// Application user.
///
/// Relations (address, profile, passwords, roles, sessions) stay in wire
/// form until one of the `embedded_*` accessors maps them.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// User identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login e-mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Plain password, set only for login or registration payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Embedded address, wire form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<serde_json::Value>,
    /// Embedded profile, wire form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<serde_json::Value>,
    /// Embedded password history, wire form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passwords: Option<serde_json::Value>,
    /// Embedded role memberships, wire form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_roles: Option<serde_json::Value>,
    /// Embedded sessions, wire form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<serde_json::Value>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("address", &self.address.is_some())
            .field("profile", &self.profile.is_some())
            .field("passwords", &self.passwords.is_some())
            .field("user_roles", &self.user_roles.is_some())
            .field("sessions", &self.sessions.is_some())
            .finish()
    }
}

impl User {
    /// Maps the embedded address.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Decode`] if the embedded record has the wrong shape.
    pub fn embedded_address(&self) -> Option<Result<Address, WireError>> {
        self.address.clone().map(mapper::decode::<Address>)
    }

    /// Maps the embedded profile.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Decode`] if the embedded record has the wrong shape.
    pub fn embedded_profile(&self) -> Option<Result<Profile, WireError>> {
        self.profile.clone().map(mapper::decode::<Profile>)
    }

    /// Maps the embedded password history.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Decode`] if the list or any record has the wrong shape.
    pub fn embedded_passwords(&self) -> Option<Result<Vec<Password>, WireError>> {
        embedded_list(self.passwords.as_ref())
    }

    /// Maps the embedded role memberships.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Decode`] if the list or any record has the wrong shape.
    pub fn embedded_user_roles(&self) -> Option<Result<Vec<UserRole>, WireError>> {
        embedded_list(self.user_roles.as_ref())
    }

    /// Maps the embedded sessions.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Decode`] if the list or any record has the wrong shape.
    pub fn embedded_sessions(&self) -> Option<Result<Vec<Session>, WireError>> {
        embedded_list(self.sessions.as_ref())
    }
}

fn embedded_list<E: WireMapped>(
    payload: Option<&serde_json::Value>,
) -> Option<Result<Vec<E>, WireError>> {
    payload.cloned().map(mapper::decode_list::<E>)
}

/// Postal address, optionally owned by a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    /// Address identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// House number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Latitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Owning user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Password with its validity window.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Password {
    /// Password identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Password content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Start of validity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateField>,
    /// End of validity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateField>,
    /// Owning user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("id", &self.id)
            .field("content", &self.content.as_ref().map(|_| "<redacted>"))
            .field("start_at", &self.start_at)
            .field("end_at", &self.end_at)
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Membership of a user in a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRole {
    /// Join record identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Start of membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateField>,
    /// End of membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateField>,
    /// Member user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Granted role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    /// Embedded user, wire form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<serde_json::Value>,
    /// Embedded role, wire form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<serde_json::Value>,
}

impl UserRole {
    /// Maps the embedded user.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Decode`] if the embedded record has the wrong shape.
    pub fn embedded_user(&self) -> Option<Result<User, WireError>> {
        self.user.clone().map(mapper::decode::<User>)
    }
}
