//! Session teardown and authentication status.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use gable_core::{Navigator, TokenStore};

/// Owns the decision that a session is beyond repair.
///
/// Status is a pure presence check against the store; the guard never
/// inspects a token's contents or guesses at expiry. The server's 401 is
/// the only expiry signal, and when a refresh cannot recover from it the
/// guard clears the pair and sends the user back to login.
pub struct SessionGuard {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Whether an access token is currently stored.
    ///
    /// The token may be long expired and this still reports true; the
    /// first authenticated request will find out.
    pub async fn is_authenticated(&self) -> bool {
        self.store.read().await.has_access_token()
    }

    /// Clears the stored pair and directs the user to the login entry
    /// point. Never fails.
    ///
    /// When one failed refresh fans out to many coalesced callers, each of
    /// them lands here; only the first finds tokens to tear down, so the
    /// user is redirected once.
    #[instrument(skip(self))]
    pub async fn invalidate(&self) {
        let had_session = !self.store.read().await.is_empty();
        self.store.clear().await;
        if had_session {
            info!("session invalidated, redirecting to login");
            self.navigator.go_to_login();
        } else {
            debug!("session already cleared");
        }
    }
}
