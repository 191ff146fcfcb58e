//! Generic transcoding: the structured value tree, scalar coercion rules,
//! and the recursive snake_case → camelCase walker.
//!
//! Nothing in this module knows about entities. Use it for payloads whose
//! shape is unknown or ad hoc; use [`crate::mapper`] when a strict,
//! known shape is required.

pub mod rules;
pub mod transcode;
pub mod value;

pub use rules::{coerce_date, format_date, is_date_like, parse_date_lenient, to_camel_case};
pub use transcode::{transcode, transcode_json};
pub use value::{Map, Value};
