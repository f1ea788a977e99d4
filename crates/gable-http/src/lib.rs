//! gable-http - reqwest-backed client for the gable panel API.
//!
//! The layering mirrors the panel's session model:
//!
//! - [`AuthClient`] sends raw requests with the session discipline applied
//!   (bearer attachment, 401-driven refresh, single retry, teardown).
//! - [`RefreshCoordinator`] owns token rotation and coalesces concurrent
//!   refreshes into one HTTP call.
//! - [`SessionGuard`] answers "am I logged in?" and tears the session down
//!   when a refresh cannot save it.
//! - [`PanelClient`] is the typed surface most callers want.
//!
//! Token persistence and post-teardown navigation stay behind the
//! [`gable_core::TokenStore`] and [`gable_core::Navigator`] ports, so the
//! same flow serves a CLI, a daemon, or a test harness.

mod client;
pub mod endpoints;
mod guard;
mod panel;
mod refresh;

pub use client::{AuthClient, RequestOptions};
pub use endpoints::{Profile, Site, SiteUser, StarterSite, User};
pub use guard::SessionGuard;
pub use panel::PanelClient;
pub use refresh::RefreshCoordinator;
