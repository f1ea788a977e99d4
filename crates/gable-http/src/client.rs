//! Authenticated request dispatch.
//!
//! [`AuthClient`] wraps a [`reqwest::Client`] with the panel's session
//! discipline: attach the stored access token, treat a 401 as expiry,
//! recover through one coalesced refresh, and retry the request exactly
//! once. When recovery fails the session is torn down and the original
//! response is handed back untouched.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Response, StatusCode};
use tracing::{debug, instrument, warn};

use gable_core::error::TransportError;
use gable_core::{AccessToken, Error, Navigator, PanelUrl, TokenStore};

use crate::endpoints;
use crate::guard::SessionGuard;
use crate::refresh::RefreshCoordinator;

/// Everything needed to build, and if necessary rebuild, one request.
///
/// The body is kept as a JSON value rather than a serialized stream so a
/// post-refresh retry can re-send it byte-for-byte.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    /// A plain GET with no body.
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST carrying the given JSON body.
    pub fn post<B: serde::Serialize>(body: &B) -> Self {
        Self {
            method: Method::POST,
            body: Some(to_json(body)),
            ..Self::default()
        }
    }

    /// A POST with no body.
    pub fn post_empty() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    /// A PUT carrying the given JSON body.
    pub fn put<B: serde::Serialize>(body: &B) -> Self {
        Self {
            method: Method::PUT,
            body: Some(to_json(body)),
            ..Self::default()
        }
    }

    /// A DELETE with no body.
    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    /// Adds a header carried on the request and any retry of it.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

// Request types are plain structs; turning one into a JSON value cannot
// fail for them.
fn to_json<B: serde::Serialize>(body: &B) -> serde_json::Value {
    serde_json::to_value(body).expect("request body must serialize to JSON")
}

/// HTTP client that keeps the caller authenticated.
///
/// Shared freely behind an [`Arc`]; all state lives in the injected
/// [`TokenStore`] and the coalescing slot of the [`RefreshCoordinator`].
pub struct AuthClient {
    base: PanelUrl,
    http: reqwest::Client,
    store: Arc<dyn TokenStore>,
    refresher: RefreshCoordinator,
    guard: SessionGuard,
}

impl AuthClient {
    pub fn new(base: PanelUrl, store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("gable/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        let refresher = RefreshCoordinator::new(http.clone(), base.clone(), Arc::clone(&store));
        let guard = SessionGuard::new(Arc::clone(&store), navigator);
        Self {
            base,
            http,
            store,
            refresher,
            guard,
        }
    }

    /// The panel this client talks to.
    pub fn base(&self) -> &PanelUrl {
        &self.base
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    pub fn refresher(&self) -> &RefreshCoordinator {
        &self.refresher
    }

    /// Sends one request to `path`, carrying the stored access token when
    /// there is one.
    ///
    /// A non-401 response comes back as-is; status is not interpreted
    /// here. On a 401 the client runs one refresh and retries once with
    /// the rotated token, and that retry's response is final even if it is
    /// again a 401. If the refresh itself fails the session is invalidated
    /// and the caller receives the original 401.
    ///
    /// Transport failures surface as [`Error::Transport`] and never
    /// trigger a refresh.
    #[instrument(skip(self, options), fields(method = %options.method))]
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Response, Error> {
        let session = self.store.read().await;
        let first = self
            .send(path, &options, session.access_token.as_ref())
            .await?;

        // A 401 from the refresh endpoint itself is final; recursing into
        // another refresh would loop on an expired refresh token.
        if first.status() != StatusCode::UNAUTHORIZED || path == endpoints::AUTH_REFRESH {
            return Ok(first);
        }

        debug!(path, "access token rejected, refreshing");

        match self.refresher.refresh().await {
            Ok(token) => self.send(path, &options, Some(&token)).await,
            Err(err) => {
                warn!(error = %err, path, "refresh failed, tearing down session");
                self.guard.invalidate().await;
                Ok(first)
            }
        }
    }

    async fn send(
        &self,
        path: &str,
        options: &RequestOptions,
        token: Option<&AccessToken>,
    ) -> Result<Response, Error> {
        let url = self.base.endpoint(path);
        let mut request = self
            .http
            .request(options.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .headers(options.headers.clone());
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token.as_str()));
        }
        if let Some(body) = options.body.as_ref() {
            request = request.json(body);
        }
        request
            .send()
            .await
            .map_err(|err| Error::Transport(map_transport(err)))
    }
}

pub(crate) fn map_transport(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}
