//! Typed entity mappers between wire records and domain records.
//!
//! Each domain entity implements [`WireMapped`] by hand, field by field,
//! following its [`EntitySchema`]. Unlike the generic transcoder, a mapper
//! is strict about shape: unknown wire fields are dropped, read-only fields
//! are never written, and embedded relations stay opaque.
//!
//! | Entity                         | Canonical strategy |
//! |--------------------------------|--------------------|
//! | Session, Profile, User         | `WireMapped`       |
//! | Address, Password, UserRole    | `WireMapped`       |
//! | anything else                  | [`crate::codec::transcode`] |

mod profile;
mod session;
mod user;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::WireError;
use crate::wire::EntitySchema;

/// Bidirectional mapping between a domain record and its wire record.
pub trait WireMapped: Sized {
    /// Exact wire shape.
    type Wire: Serialize + DeserializeOwned;

    /// Field list the mapping follows.
    const SCHEMA: &'static EntitySchema;

    /// Maps a wire record to a domain record. Infallible: absent fields stay
    /// absent and unparseable dates are preserved as text.
    fn from_wire(wire: Self::Wire) -> Self;

    /// Maps a (partial) domain record to a (partial) wire record holding
    /// only writable fields.
    fn to_wire(&self) -> Self::Wire;
}

/// Decodes a raw JSON payload into a domain record.
///
/// # Errors
///
/// Returns [`WireError::Decode`] if the payload is not an object or a field
/// has the wrong scalar kind.
pub fn decode<E: WireMapped>(payload: serde_json::Value) -> Result<E, WireError> {
    let wire = serde_json::from_value::<E::Wire>(payload).map_err(|source| WireError::Decode {
        entity: E::SCHEMA.entity,
        source,
    })?;
    Ok(E::from_wire(wire))
}

/// Decodes a raw JSON array into domain records, keeping order.
///
/// # Errors
///
/// Returns [`WireError::Decode`] if the payload is not an array or any
/// element fails to decode.
pub fn decode_list<E: WireMapped>(payload: serde_json::Value) -> Result<Vec<E>, WireError> {
    let wires =
        serde_json::from_value::<Vec<E::Wire>>(payload).map_err(|source| WireError::Decode {
            entity: E::SCHEMA.entity,
            source,
        })?;
    tracing::debug!(entity = E::SCHEMA.entity, count = wires.len(), "decoded wire list");
    Ok(wires.into_iter().map(E::from_wire).collect())
}

/// Encodes a (partial) domain record as a JSON wire payload.
///
/// # Errors
///
/// Returns [`WireError::Encode`] if serialization fails.
pub fn encode<E: WireMapped>(domain: &E) -> Result<serde_json::Value, WireError> {
    serde_json::to_value(domain.to_wire()).map_err(WireError::Encode)
}
