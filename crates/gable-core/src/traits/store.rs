//! Durable token storage port.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::session::Session;

/// Durable storage for the current session's credential pair.
///
/// Implementations hold exactly one [`Session`] and replace both of its
/// fields together: after a `write` there is never a state mixing tokens
/// from two different writes. What persistence means is up to the
/// implementation — a file for a CLI, process memory for tests and
/// embedders.
///
/// The methods are infallible by contract. An implementation that cannot
/// read its backing state (missing file, corrupt contents) returns an
/// empty session, and one that cannot persist logs the failure and moves
/// on; the session is simply "whatever was last written". Storage faults
/// never feed back into the request/refresh flow.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the current session. Unreadable state reads as empty.
    async fn read(&self) -> Session;

    /// Replace the stored session with `session`, both fields together.
    async fn write(&self, session: &Session);

    /// Drop both tokens.
    async fn clear(&self);
}

/// An in-memory [`TokenStore`].
///
/// The default store for embedding the client in a larger program, and
/// the substitute used by tests. Cheap and unsynchronized with any other
/// instance; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    session: RwLock<Session>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing session.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn read(&self) -> Session {
        self.session.read().unwrap().clone()
    }

    async fn write(&self, session: &Session) {
        *self.session.write().unwrap() = session.clone();
    }

    async fn clear(&self) {
        *self.session.write().unwrap() = Session::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{AccessToken, RefreshToken};

    #[tokio::test]
    async fn starts_empty() {
        let store = MemoryTokenStore::new();
        assert!(store.read().await.is_empty());
    }

    #[tokio::test]
    async fn write_replaces_both_fields() {
        let store = MemoryTokenStore::with_session(Session::new(
            AccessToken::new("old-access"),
            RefreshToken::new("old-refresh"),
        ));

        let next = Session::new(AccessToken::new("new-access"), RefreshToken::new("new-refresh"));
        store.write(&next).await;

        let read = store.read().await;
        assert_eq!(read.access_token.unwrap().as_str(), "new-access");
        assert_eq!(read.refresh_token.unwrap().as_str(), "new-refresh");
    }

    #[tokio::test]
    async fn clear_drops_both_fields() {
        let store = MemoryTokenStore::with_session(Session::new(
            AccessToken::new("access"),
            RefreshToken::new("refresh"),
        ));

        store.clear().await;
        assert!(store.read().await.is_empty());
    }
}
