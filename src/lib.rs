//! # wirecase
//!
//! Wire-to-domain transcoding layer for a client that talks to a backend
//! speaking snake_case JSON with ISO-8601 date strings, while the
//! application works with camelCase records and native dates.
//!
//! Two strategies are provided. The generic transcoder ([`codec::transcode`])
//! walks any nested payload, renaming keys and coercing date-like strings.
//! The typed entity mappers ([`mapper::WireMapped`]) convert known entities
//! field by field and are strict about shape and writability.
//!
//! ## Architecture
//!
//! ```text
//! Backend (HTTP, snake_case JSON)
//!     │
//!     ├── HttpTransport (transport/)
//!     │
//!     ├── SessionService (service/)
//!     │
//!     ├── Entity mappers (mapper/)        ── UserStore (domain/)
//!     ├── Wire records + schemas (wire/)
//!     │
//!     ├── Generic transcoder (codec/)
//!     └── Domain records (domain/)
//! ```

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod mapper;
pub mod service;
pub mod transport;
pub mod wire;
