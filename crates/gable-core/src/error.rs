//! Error types for the gable client toolkit.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, API, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for gable operations.
///
/// This error type covers all possible failure modes in the toolkit,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout) on an ordinary
    /// request. These are surfaced as-is and never trigger a refresh.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors raised by the token refresh flow.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Non-success responses from the panel API.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid base URL and similar).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Errors from the token refresh flow.
///
/// Every variant invalidates the session when it reaches the request
/// layer: the store is cleared and the navigator is pointed at the login
/// entry point. The type is `Clone` because a single in-flight refresh
/// delivers its outcome to every caller that coalesced onto it.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// A refresh was needed but no refresh token is stored.
    #[error("no refresh token stored")]
    NoRefreshToken,

    /// The refresh endpoint returned a non-success status.
    #[error("refresh rejected with status {status}")]
    RefreshRejected { status: u16 },

    /// The refresh endpoint returned a success status but the body was
    /// missing a required token field.
    #[error("malformed refresh response")]
    MalformedResponse,

    /// The refresh call itself failed at the transport level. Treated the
    /// same as a rejection for invalidation purposes.
    #[error("refresh transport failure: {message}")]
    Network { message: String },
}

/// A non-success response from the panel API.
///
/// Carries the HTTP status and the `error` field of the response body,
/// when the backend provided one.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, if present.
    pub message: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid panel base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },
}
