//! Shared helpers for wiremock-backed tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use gable_core::{AccessToken, MemoryTokenStore, Navigator, PanelUrl, RefreshToken, Session};
use wiremock::MockServer;

/// Panel URL pointing at a mock server.
pub fn panel_url(server: &MockServer) -> PanelUrl {
    // Plain HTTP is only accepted for loopback hosts.
    PanelUrl::new(&format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

/// Store seeded with a full token pair.
pub fn seeded_store(access: &str, refresh: &str) -> Arc<MemoryTokenStore> {
    Arc::new(MemoryTokenStore::with_session(Session::new(
        AccessToken::new(access),
        RefreshToken::new(refresh),
    )))
}

/// Navigator that counts how many times it was pointed at login.
#[derive(Default)]
pub struct CountingNavigator {
    calls: AtomicUsize,
}

impl CountingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn logins_requested(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn go_to_login(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}
