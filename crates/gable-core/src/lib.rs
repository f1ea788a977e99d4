//! gable-core - Core types and ports for the gable panel client toolkit.

pub mod credentials;
pub mod error;
pub mod session;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use session::{Session, TokenPair};
pub use tokens::{AccessToken, RefreshToken};
pub use traits::{MemoryTokenStore, Navigator, NoopNavigator, TokenStore};
pub use types::PanelUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
