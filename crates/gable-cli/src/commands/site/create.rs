//! Create site command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Display name for the site
    #[arg(long)]
    pub name: String,

    /// URL slug for the site
    #[arg(long)]
    pub slug: String,
}

pub async fn run(base: &str, args: CreateArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    eprintln!("{}", "Creating site...".dimmed());

    let site = client
        .create_site(&args.name, &args.slug)
        .await
        .context("Failed to create site")?;

    output::success(&format!("Created site: {}", site.slug));
    output::field("ID", &site.id);
    output::field("Status", &site.status);

    Ok(())
}
