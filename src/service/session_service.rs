//! Session service: the `/sessions` endpoints in domain terms.

use std::sync::Arc;

use crate::domain::Session;
use crate::error::WireError;
use crate::mapper::{decode, decode_list, encode};
use crate::transport::Transport;

/// Session operations against the backend.
///
/// Stateless coordinator: every method follows the pattern encode domain
/// record → call transport → decode wire payload → return domain record.
#[derive(Debug)]
pub struct SessionService<T> {
    transport: Arc<T>,
}

impl<T> Clone for SessionService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> SessionService<T> {
    /// Creates a new `SessionService`.
    #[must_use]
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Returns a reference to the inner transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Lists every session of a user (`GET sessions/user/{user_id}`).
    ///
    /// # Errors
    ///
    /// Returns a [`WireError`] if the call fails or the payload is not a
    /// list of session records.
    pub async fn user_sessions(&self, user_id: i64) -> Result<Vec<Session>, WireError> {
        let payload = self.transport.get(&format!("sessions/user/{user_id}")).await?;
        let sessions = decode_list::<Session>(payload)?;
        tracing::debug!(user_id, count = sessions.len(), "fetched user sessions");
        Ok(sessions)
    }

    /// Creates a session for a user (`POST sessions/user/{user_id}`).
    ///
    /// Only writable fields of `session` are sent.
    ///
    /// # Errors
    ///
    /// Returns a [`WireError`] if the call fails or the response is not a
    /// session record.
    pub async fn create_session(
        &self,
        user_id: i64,
        session: &Session,
    ) -> Result<Session, WireError> {
        let body = encode(session)?;
        let payload = self
            .transport
            .post(&format!("sessions/user/{user_id}"), &body)
            .await?;
        let created = decode::<Session>(payload)?;
        tracing::info!(user_id, session_id = ?created.id, "session created");
        Ok(created)
    }

    /// Fetches one session (`GET sessions/{session_id}`).
    ///
    /// # Errors
    ///
    /// Returns a [`WireError`] if the call fails (including
    /// [`WireError::Status`] 404) or the payload is not a session record.
    pub async fn session(&self, session_id: &str) -> Result<Session, WireError> {
        let payload = self.transport.get(&format!("sessions/{session_id}")).await?;
        decode::<Session>(payload)
    }

    /// Updates a session, e.g. to renew its token or change its state
    /// (`PUT sessions/{session_id}`).
    ///
    /// `updates` is a partial record; absent fields are not sent.
    ///
    /// # Errors
    ///
    /// Returns a [`WireError`] if the call fails or the response is not a
    /// session record.
    pub async fn update_session(
        &self,
        session_id: &str,
        updates: &Session,
    ) -> Result<Session, WireError> {
        let body = encode(updates)?;
        let payload = self
            .transport
            .put(&format!("sessions/{session_id}"), &body)
            .await?;
        let updated = decode::<Session>(payload)?;
        tracing::info!(session_id, "session updated");
        Ok(updated)
    }

    /// Revokes a session (`DELETE sessions/{session_id}`).
    ///
    /// # Errors
    ///
    /// Returns a [`WireError`] if the call fails.
    pub async fn revoke_session(&self, session_id: &str) -> Result<(), WireError> {
        self.transport
            .delete(&format!("sessions/{session_id}"))
            .await?;
        tracing::info!(session_id, "session revoked");
        Ok(())
    }
}
