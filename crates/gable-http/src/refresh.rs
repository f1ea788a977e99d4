//! Token refresh with single-flight coalescing.

use std::sync::{Arc, Mutex};

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use tracing::{debug, info, instrument};

use gable_core::error::AuthError;
use gable_core::{AccessToken, PanelUrl, RefreshToken, Session, TokenPair, TokenStore};

use crate::endpoints::{self, RefreshRequest, TokenPairResponse};

type RefreshFlight = Shared<BoxFuture<'static, Result<AccessToken, AuthError>>>;

/// Exchanges the stored refresh token for a rotated token pair.
///
/// Calls that arrive while an exchange is in flight join it instead of
/// starting their own: every caller observes the outcome of the single
/// underlying HTTP call. Only after that flight settles can a later
/// expiry start a fresh one. This keeps rotation safe when many requests
/// hit a 401 at once; a second exchange would carry the already-consumed
/// refresh token and be rejected.
pub struct RefreshCoordinator {
    http: reqwest::Client,
    base: PanelUrl,
    store: Arc<dyn TokenStore>,
    in_flight: Mutex<Option<RefreshFlight>>,
}

impl RefreshCoordinator {
    pub fn new(http: reqwest::Client, base: PanelUrl, store: Arc<dyn TokenStore>) -> Self {
        Self {
            http,
            base,
            store,
            in_flight: Mutex::new(None),
        }
    }

    /// Performs a refresh, coalescing with any exchange already in flight.
    ///
    /// On success the rotated pair has been written to the store and the
    /// new access token is returned. Errors are shared verbatim with every
    /// coalesced caller.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<AccessToken, AuthError> {
        let flight = {
            // Held only to install or join a flight, never across an await.
            let mut slot = self.in_flight.lock().unwrap();
            match slot.as_ref() {
                Some(flight) => {
                    debug!("joining refresh already in flight");
                    flight.clone()
                }
                None => {
                    let flight = exchange(
                        self.http.clone(),
                        self.base.clone(),
                        Arc::clone(&self.store),
                    )
                    .boxed()
                    .shared();
                    *slot = Some(flight.clone());
                    flight
                }
            }
        };

        let result = flight.clone().await;

        // Clear the settled flight so the next expiry starts a new one.
        // The pointer check keeps a slow waiter from discarding a newer
        // flight installed after this one settled.
        let mut slot = self.in_flight.lock().unwrap();
        if slot.as_ref().is_some_and(|current| current.ptr_eq(&flight)) {
            *slot = None;
        }

        result
    }
}

/// The actual exchange: one POST to the refresh endpoint, then persist
/// the rotated pair.
async fn exchange(
    http: reqwest::Client,
    base: PanelUrl,
    store: Arc<dyn TokenStore>,
) -> Result<AccessToken, AuthError> {
    let session = store.read().await;
    let Some(refresh_token) = session.refresh_token else {
        debug!("no refresh token stored, nothing to exchange");
        return Err(AuthError::NoRefreshToken);
    };

    info!("refreshing session tokens");

    let response = http
        .post(base.endpoint(endpoints::AUTH_REFRESH))
        .json(&RefreshRequest {
            refresh_token: refresh_token.as_str(),
        })
        .send()
        .await
        .map_err(|err| AuthError::Network {
            message: err.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        info!(status = status.as_u16(), "refresh token rejected");
        return Err(AuthError::RefreshRejected {
            status: status.as_u16(),
        });
    }

    let body: TokenPairResponse = response
        .json()
        .await
        .map_err(|_| AuthError::MalformedResponse)?;

    let pair = TokenPair::new(
        AccessToken::new(body.access_token),
        RefreshToken::new(body.refresh_token),
    );
    let access = pair.access_token.clone();
    store.write(&Session::from(pair)).await;

    debug!("session tokens rotated");
    Ok(access)
}
