//! Panel API endpoint paths and request/response types.
//!
//! The panel speaks JSON with camelCase field names; every type here
//! carries the serde renames so callers work with snake_case Rust fields.

use serde::{Deserialize, Serialize};

// ==== Endpoint Paths ====

/// Exchange credentials for a token pair.
pub const AUTH_LOGIN: &str = "/api/auth/login";

/// Exchange a refresh token for a rotated token pair.
///
/// A 401 from this path is final: the client never refreshes in response
/// to it, otherwise an expired refresh token would recurse forever.
pub const AUTH_REFRESH: &str = "/api/auth/refresh";

/// Self-serve signup; returns a token pair and a starter site.
pub const PUBLIC_REGISTER: &str = "/api/public/register";

/// Profile of the authenticated user.
pub const ME: &str = "/api/me";

/// Sites visible to the authenticated user.
pub const SITES: &str = "/api/sites";

/// Admin-only user listing and creation.
pub const ADMIN_USERS: &str = "/api/admin/users";

/// A single site.
pub fn site(id: &str) -> String {
    format!("{SITES}/{id}")
}

/// Draft content of a single site.
pub fn site_content(id: &str) -> String {
    format!("{SITES}/{id}/content")
}

/// Publish a site.
pub fn site_publish(id: &str) -> String {
    format!("{SITES}/{id}/publish")
}

/// Revert a site to draft.
pub fn site_unpublish(id: &str) -> String {
    format!("{SITES}/{id}/unpublish")
}

/// Admin-only membership listing for a site.
pub fn admin_site_users(id: &str) -> String {
    format!("/api/admin/sites/{id}/users")
}

/// Admin-only access grant for a site.
pub fn admin_site_grant(id: &str) -> String {
    format!("/api/admin/sites/{id}/grant")
}

// ==== Request Types ====

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateSiteRequest<'a> {
    pub name: &'a str,
    pub slug: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateContentRequest<'a> {
    pub content: &'a serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_role: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantAccessRequest<'a> {
    pub email: &'a str,
    pub role: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_if_missing: Option<bool>,
}

// ==== Response Types ====

/// Token pair returned by login and refresh.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Registration returns a token pair plus the freshly provisioned site.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub site: StarterSite,
}

/// The site provisioned during registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterSite {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub status: String,
}

/// Profile of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub global_role: String,
}

/// A site as returned by the sites endpoints.
///
/// Timestamps stay as the RFC 3339 strings the panel emits; the client
/// only ever displays them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub status: String,
    #[serde(default)]
    pub content: serde_json::Value,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// A user as returned by the admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub global_role: String,
    #[serde(default)]
    pub created_at: String,
}

/// A user's membership in a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteUser {
    pub user_id: String,
    pub email: String,
    pub role: String,
}

/// Mutation acknowledgements carry the resulting status.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Error body the panel attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
}
