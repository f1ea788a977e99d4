//! Refresh command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RefreshArgs {}

pub async fn run(base: &str, _args: RefreshArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    eprintln!("{}", "Refreshing session...".dimmed());

    // The coordinator persists the rotated pair itself.
    client
        .refresh_session()
        .await
        .context("Failed to refresh session")?;

    output::success("Session refreshed successfully");

    Ok(())
}
