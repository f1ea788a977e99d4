//! Validated value types.

mod panel_url;

pub use panel_url::PanelUrl;
