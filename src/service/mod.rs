//! Service layer: backend calls wrapped in entity mappers.
//!
//! [`SessionService`] sends domain records through the Session mapper
//! before handing them to a [`crate::transport::Transport`], and maps every
//! response back into domain records.

pub mod session_service;

pub use session_service::SessionService;
