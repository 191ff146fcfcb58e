//! Injectable holder for the signed-in user.
//!
//! [`UserStore`] keeps the current [`User`] behind a [`RwLock`] and
//! publishes every change on a [`tokio::sync::broadcast`] channel. Nothing
//! here is global: the application creates one store and hands it to the
//! components that need it.

use tokio::sync::{RwLock, broadcast};

use super::User;
use crate::config::ClientConfig;

/// Change notification emitted by [`UserStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum UserChange {
    /// A user was stored (sign-in or profile refresh).
    Set(User),
    /// The stored user was removed (sign-out).
    Cleared,
}

/// Current-user state with change notifications.
///
/// Backed by a broadcast channel with a configurable capacity. When the
/// ring buffer is full, lagging receivers lose the oldest changes and
/// should re-read [`UserStore::current`].
#[derive(Debug)]
pub struct UserStore {
    current: RwLock<Option<User>>,
    sender: broadcast::Sender<UserChange>,
}

impl UserStore {
    /// Creates an empty store. A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            current: RwLock::new(None),
            sender,
        }
    }

    /// Creates an empty store sized by `USER_EVENT_CAPACITY`.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.user_event_capacity)
    }

    /// Returns a copy of the stored user.
    pub async fn current(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    /// Returns `true` if a user is stored.
    pub async fn is_set(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Stores `user` and notifies subscribers.
    ///
    /// Returns the number of subscribers that received the change.
    pub async fn set(&self, user: User) -> usize {
        let mut current = self.current.write().await;
        *current = Some(user.clone());
        tracing::debug!(user_id = ?user.id, "current user set");
        // Sent under the write lock so notification order matches write order.
        let delivered = self.sender.send(UserChange::Set(user)).unwrap_or(0);
        drop(current);
        delivered
    }

    /// Removes the stored user and notifies subscribers.
    ///
    /// Returns the number of subscribers that received the change.
    pub async fn clear(&self) -> usize {
        let mut current = self.current.write().await;
        *current = None;
        tracing::debug!("current user cleared");
        let delivered = self.sender.send(UserChange::Cleared).unwrap_or(0);
        drop(current);
        delivered
    }

    /// Creates a receiver for all future changes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<UserChange> {
        self.sender.subscribe()
    }

    /// Returns the current number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
