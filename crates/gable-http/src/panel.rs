//! Typed surface over the panel API.

use std::sync::Arc;

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use gable_core::error::ApiError;
use gable_core::{
    AccessToken, Credentials, Error, Navigator, PanelUrl, RefreshToken, Session, TokenPair,
    TokenStore,
};

use crate::client::{AuthClient, RequestOptions, map_transport};
use crate::endpoints::{
    self, CreateSiteRequest, CreateUserRequest, ErrorResponse, GrantAccessRequest, LoginRequest,
    Profile, RegisterRequest, RegisterResponse, Site, SiteUser, StarterSite, StatusResponse,
    TokenPairResponse, UpdateContentRequest, User,
};

/// High-level client for the panel API.
///
/// Wraps an [`AuthClient`] and turns raw responses into panel types, with
/// non-2xx statuses mapped to [`ApiError`]. Session establishment (login,
/// register) and teardown (logout) write through the shared token store,
/// so the authenticated endpoints pick the tokens up on their next call.
pub struct PanelClient {
    auth: AuthClient,
    store: Arc<dyn TokenStore>,
}

impl PanelClient {
    pub fn new(base: PanelUrl, store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        let auth = AuthClient::new(base, Arc::clone(&store), navigator);
        Self { auth, store }
    }

    /// The underlying authenticated client, for raw requests.
    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    // ==== Session lifecycle ====

    /// Exchanges credentials for a token pair and stores it.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<(), Error> {
        let response = self
            .auth
            .request(
                endpoints::AUTH_LOGIN,
                RequestOptions::post(&LoginRequest {
                    email: credentials.email(),
                    password: credentials.password(),
                }),
            )
            .await?;
        let pair: TokenPairResponse = read_json(response).await?;
        self.store.write(&Session::from(token_pair(pair))).await;
        info!("logged in");
        Ok(())
    }

    /// Registers a new account, stores its token pair, and returns the
    /// starter site provisioned for it.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn register(&self, credentials: &Credentials) -> Result<StarterSite, Error> {
        let response = self
            .auth
            .request(
                endpoints::PUBLIC_REGISTER,
                RequestOptions::post(&RegisterRequest {
                    email: credentials.email(),
                    password: credentials.password(),
                }),
            )
            .await?;
        let body: RegisterResponse = read_json(response).await?;
        let pair = TokenPair::new(
            AccessToken::new(body.access_token),
            RefreshToken::new(body.refresh_token),
        );
        self.store.write(&Session::from(pair)).await;
        info!(site = %body.site.slug, "registered");
        Ok(body.site)
    }

    /// Discards the stored session. Local only; the panel keeps no
    /// server-side session to revoke.
    pub async fn logout(&self) {
        self.store.clear().await;
        info!("logged out");
    }

    /// Whether an access token is currently stored.
    pub async fn is_authenticated(&self) -> bool {
        self.auth.guard().is_authenticated().await
    }

    /// Forces a token rotation outside the usual 401 path.
    pub async fn refresh_session(&self) -> Result<(), Error> {
        self.auth.refresher().refresh().await?;
        Ok(())
    }

    // ==== Profile ====

    pub async fn me(&self) -> Result<Profile, Error> {
        self.get(endpoints::ME).await
    }

    // ==== Sites ====

    pub async fn sites(&self) -> Result<Vec<Site>, Error> {
        self.get(endpoints::SITES).await
    }

    pub async fn site(&self, id: &str) -> Result<Site, Error> {
        self.get(&endpoints::site(id)).await
    }

    #[instrument(skip(self))]
    pub async fn create_site(&self, name: &str, slug: &str) -> Result<Site, Error> {
        let response = self
            .auth
            .request(
                endpoints::SITES,
                RequestOptions::post(&CreateSiteRequest { name, slug }),
            )
            .await?;
        read_json(response).await
    }

    /// Replaces the draft content of a site.
    #[instrument(skip(self, content))]
    pub async fn update_site_content(
        &self,
        id: &str,
        content: &serde_json::Value,
    ) -> Result<(), Error> {
        let response = self
            .auth
            .request(
                &endpoints::site_content(id),
                RequestOptions::put(&UpdateContentRequest { content }),
            )
            .await?;
        read_json::<StatusResponse>(response).await?;
        Ok(())
    }

    /// Publishes a site; returns its new status.
    #[instrument(skip(self))]
    pub async fn publish_site(&self, id: &str) -> Result<String, Error> {
        let response = self
            .auth
            .request(&endpoints::site_publish(id), RequestOptions::post_empty())
            .await?;
        let body: StatusResponse = read_json(response).await?;
        Ok(body.status)
    }

    /// Reverts a site to draft; returns its new status.
    #[instrument(skip(self))]
    pub async fn unpublish_site(&self, id: &str) -> Result<String, Error> {
        let response = self
            .auth
            .request(&endpoints::site_unpublish(id), RequestOptions::post_empty())
            .await?;
        let body: StatusResponse = read_json(response).await?;
        Ok(body.status)
    }

    // ==== Admin ====

    pub async fn users(&self) -> Result<Vec<User>, Error> {
        self.get(endpoints::ADMIN_USERS).await
    }

    #[instrument(skip(self, password))]
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        global_role: Option<&str>,
    ) -> Result<User, Error> {
        let response = self
            .auth
            .request(
                endpoints::ADMIN_USERS,
                RequestOptions::post(&CreateUserRequest {
                    email,
                    password,
                    global_role,
                }),
            )
            .await?;
        read_json(response).await
    }

    pub async fn site_users(&self, site_id: &str) -> Result<Vec<SiteUser>, Error> {
        self.get(&endpoints::admin_site_users(site_id)).await
    }

    /// Grants a user access to a site, optionally creating the account.
    #[instrument(skip(self))]
    pub async fn grant_site_access(
        &self,
        site_id: &str,
        email: &str,
        role: &str,
        create_if_missing: bool,
    ) -> Result<(), Error> {
        let response = self
            .auth
            .request(
                &endpoints::admin_site_grant(site_id),
                RequestOptions::post(&GrantAccessRequest {
                    email,
                    role,
                    create_if_missing: create_if_missing.then_some(true),
                }),
            )
            .await?;
        read_json::<StatusResponse>(response).await?;
        Ok(())
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        let response = self.auth.request(path, RequestOptions::get()).await?;
        read_json(response).await
    }
}

fn token_pair(body: TokenPairResponse) -> TokenPair {
    TokenPair::new(
        AccessToken::new(body.access_token),
        RefreshToken::new(body.refresh_token),
    )
}

/// Decodes a JSON body on success, or maps the panel's error envelope to
/// an [`ApiError`].
async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, Error> {
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|err| Error::Transport(map_transport(err)))
    } else {
        Err(Error::Api(read_error(response).await))
    }
}

/// Pulls the `{"error": "..."}` message out of a failed response, falling
/// back to a bare status when the body is not the expected envelope.
async fn read_error(response: Response) -> ApiError {
    let status = response.status().as_u16();
    match response.json::<ErrorResponse>().await {
        Ok(body) => ApiError::new(status, body.error),
        Err(_) => ApiError::new(status, None),
    }
}
