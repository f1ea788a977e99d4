//! Ports for the capabilities the client runtime must provide.

mod navigator;
mod store;

pub use navigator::{Navigator, NoopNavigator};
pub use store::{MemoryTokenStore, TokenStore};
