//! Profile domain record.

use serde::{Deserialize, Serialize};

use super::DateField;

/// Path segment under which the backend serves profile photos.
const PHOTO_ROUTE: &str = "profiles";

/// User profile (1:1 with a user).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Profile identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Owning user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Photo path relative to the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Creation time, assigned by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateField>,
    /// Last update time, assigned by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateField>,
}

impl Profile {
    /// Builds the absolute photo URL under `base_url`
    /// (`{base_url}/profiles/{photo}`).
    ///
    /// Returns `None` when the profile has no photo.
    #[must_use]
    pub fn photo_url(&self, base_url: &str) -> Option<String> {
        let photo = self.photo.as_deref().filter(|path| !path.is_empty())?;
        Some(format!(
            "{}/{PHOTO_ROUTE}/{}",
            base_url.trim_end_matches('/'),
            photo.trim_start_matches('/')
        ))
    }
}
