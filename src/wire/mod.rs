//! Wire layer: exact backend record shapes and their field schemas.
//!
//! Every `*Wire` struct uses the backend's field names verbatim (snake_case,
//! plus the odd legacy key such as `FACode`). Dates travel as ISO-8601
//! strings. All fields are optional: a missing wire field simply stays
//! absent, and `skip_serializing_if` keeps absent fields out of outgoing
//! payloads instead of sending `null`.

pub mod profile_dto;
pub mod schema;
pub mod session_dto;
pub mod user_dto;

pub use profile_dto::ProfileWire;
pub use schema::{Access, Direction, EntitySchema, FieldKind, FieldSpec};
pub use session_dto::SessionWire;
pub use user_dto::{AddressWire, PasswordWire, UserRoleWire, UserWire};
