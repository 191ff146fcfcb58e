//! Error types for decoding, encoding, transport and configuration.
//!
//! The transcoding core itself is infallible: malformed dates are kept
//! unparsed and missing fields stay absent. [`WireError`] covers everything
//! around it: a payload whose scalar kinds cannot fill a typed wire record,
//! a failed HTTP exchange, or a bad configuration value.

/// Central error enum for the crate.
///
/// # Error Code Ranges
///
/// | Range     | Category       |
/// |-----------|----------------|
/// | 1000–1999 | Payload shape  |
/// | 2000–2999 | Transport      |
/// | 3000–3999 | Configuration  |
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A wire payload could not fill the typed wire record of an entity.
    #[error("cannot decode {entity} payload: {source}")]
    Decode {
        /// Entity name from its wire schema.
        entity: &'static str,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A wire record could not be serialized.
    #[error("cannot encode wire record: {0}")]
    Encode(#[source] serde_json::Error),

    /// The HTTP client failed (connection, timeout, body).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status} for {path}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Request path relative to the API base URL.
        path: String,
    },

    /// A configuration value is present but unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl WireError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Decode { .. } => 1001,
            Self::Encode(_) => 1002,
            Self::Http(_) => 2001,
            Self::Status { .. } => 2002,
            Self::InvalidConfig(_) => 3001,
        }
    }

    /// Returns `true` if the backend reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
