//! Date-bearing domain field.
//!
//! [`DateField`] is what a wire date becomes after entity mapping: a parsed
//! UTC instant, or the original string when it could not be parsed. Keeping
//! the raw text means a malformed backend value is never lost and is sent
//! back byte-for-byte.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{format_date, parse_date_lenient};

/// A date field that is either parsed or preserved as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateField {
    /// Successfully parsed instant.
    Parsed(DateTime<Utc>),
    /// Wire text that did not parse as a date.
    Unparsed(String),
}

impl DateField {
    /// Parses a wire date string, keeping it verbatim on failure.
    #[must_use]
    pub fn from_wire(raw: String) -> Self {
        match parse_date_lenient(&raw) {
            Some(at) => Self::Parsed(at),
            None => {
                tracing::trace!(raw = %raw, "date field left unparsed");
                Self::Unparsed(raw)
            }
        }
    }

    /// Returns the wire form: canonical ISO-8601, or the original text.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Parsed(at) => format_date(at),
            Self::Unparsed(raw) => raw.clone(),
        }
    }

    /// Returns the instant if parsed.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Parsed(at) => Some(at),
            Self::Unparsed(_) => None,
        }
    }

    /// Returns `true` if the wire value was a valid date.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

impl From<DateTime<Utc>> for DateField {
    fn from(at: DateTime<Utc>) -> Self {
        Self::Parsed(at)
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl Serialize for DateField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for DateField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_wire)
    }
}
