//! Session state: the stored credential pair.

use crate::tokens::{AccessToken, RefreshToken};

/// The current session's credential pair, as held by a [`TokenStore`].
///
/// Either field may be absent: a fresh client has neither token, and a
/// cleared (logged-out or invalidated) session has both absent. The store
/// contract guarantees the two fields are always read and written
/// together, so a rotated refresh token is never paired with a stale
/// access token.
///
/// Presence of `access_token` is what authentication checks report; no
/// client-side validity or expiry check is ever performed.
///
/// [`TokenStore`]: crate::traits::TokenStore
#[derive(Clone, Debug, Default)]
pub struct Session {
    /// Short-lived bearer credential, if one is stored.
    pub access_token: Option<AccessToken>,
    /// Longer-lived rotation credential, if one is stored.
    pub refresh_token: Option<RefreshToken>,
}

impl Session {
    /// A session with both tokens absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A session holding the given pair.
    pub fn new(access_token: AccessToken, refresh_token: RefreshToken) -> Self {
        Self {
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
        }
    }

    /// Returns true if an access token is present.
    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Returns true if both tokens are absent.
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

/// A complete token pair, as returned by login, register, and refresh.
///
/// Unlike [`Session`], both fields are required: a refresh response missing
/// either token is malformed, never a partial success.
#[derive(Clone, Debug)]
pub struct TokenPair {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
}

impl TokenPair {
    pub fn new(access_token: AccessToken, refresh_token: RefreshToken) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

impl From<TokenPair> for Session {
    fn from(pair: TokenPair) -> Self {
        Session::new(pair.access_token, pair.refresh_token)
    }
}
