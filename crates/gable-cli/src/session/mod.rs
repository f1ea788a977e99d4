//! Session persistence and teardown wiring.

mod navigator;
mod store;

pub use navigator::TerminalNavigator;
pub use store::FileTokenStore;

use std::sync::Arc;

use anyhow::{Context, Result};

use gable_core::PanelUrl;
use gable_http::PanelClient;

/// Build a panel client wired to the on-disk session store.
pub fn panel_client(base: &str) -> Result<PanelClient> {
    let base = PanelUrl::new(base).context("Invalid panel URL")?;
    let store = Arc::new(FileTokenStore::new()?);
    Ok(PanelClient::new(base, store, Arc::new(TerminalNavigator)))
}
