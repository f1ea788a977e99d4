//! Unpublish site command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UnpublishArgs {
    /// Site id
    pub id: String,
}

pub async fn run(base: &str, args: UnpublishArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    let status = client
        .unpublish_site(&args.id)
        .await
        .context("Failed to unpublish site")?;

    output::success("Site reverted to draft");
    output::field("Status", &status);

    Ok(())
}
