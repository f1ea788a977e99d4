//! Navigation port for session teardown.

/// Directs the user to the login entry point.
///
/// Invoked exactly once per failed refresh, after the stored session has
/// been cleared. What "navigating" means is up to the runtime: a browser
/// shell changes location, a terminal client prints instructions. The
/// call is fire-and-forget; the request that triggered it does not wait
/// on the transition.
pub trait Navigator: Send + Sync {
    /// Trigger the one-way transition to the login entry point.
    fn go_to_login(&self);
}

/// A [`Navigator`] that does nothing.
///
/// For embedders that surface the cleared session through their own UI
/// state instead of an immediate navigation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn go_to_login(&self) {}
}
