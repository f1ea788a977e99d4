//! Publish site command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Site id
    pub id: String,
}

pub async fn run(base: &str, args: PublishArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    let status = client
        .publish_site(&args.id)
        .await
        .context("Failed to publish site")?;

    output::success("Site published");
    output::field("Status", &status);

    Ok(())
}
