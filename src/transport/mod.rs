//! Transport seam between services and the backend.
//!
//! [`Transport`] moves raw JSON wire payloads; it knows nothing about
//! entities or casing. [`HttpTransport`] is the `reqwest` implementation;
//! tests provide in-memory ones.

pub mod http;

use std::future::Future;

use crate::error::WireError;

pub use http::HttpTransport;

/// Request/response exchange of wire payloads.
///
/// Paths are relative to the backend's API base (`sessions/abc`).
pub trait Transport: Send + Sync {
    /// Fetches the payload at `path`.
    fn get(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<serde_json::Value, WireError>> + Send;

    /// Creates a resource at `path` and returns the backend's payload.
    fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, WireError>> + Send;

    /// Replaces or updates the resource at `path` and returns the backend's payload.
    fn put(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, WireError>> + Send;

    /// Deletes the resource at `path`.
    fn delete(&self, path: &str) -> impl Future<Output = Result<(), WireError>> + Send;
}
