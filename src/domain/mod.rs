//! Domain layer: the camelCase records consumed by the application.
//!
//! Domain records carry native dates ([`DateField`]), typed enums where the
//! wire has enum-like strings, and keep embedded relations opaque until a
//! caller explicitly maps them. [`UserStore`] is the injectable holder for
//! the signed-in user.

pub mod date_field;
pub mod profile;
pub mod record_id;
pub mod session;
pub mod user;
pub mod user_store;

pub use date_field::DateField;
pub use profile::Profile;
pub use record_id::RecordId;
pub use session::{Session, SessionState};
pub use user::{Address, Password, User, UserRole};
pub use user_store::{UserChange, UserStore};
