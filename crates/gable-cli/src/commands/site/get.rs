//! Get site command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Site id
    pub id: String,

    /// Pretty-print the site as JSON, content included
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(base: &str, args: GetArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    let site = client.site(&args.id).await.context("Failed to fetch site")?;

    if args.pretty {
        output::json_pretty(&site)?;
        return Ok(());
    }

    output::field("ID", &site.id);
    output::field("Name", &site.name);
    output::field("Slug", &site.slug);
    output::field("Status", &site.status);
    if let Some(published_at) = &site.published_at {
        output::field("Published at", published_at);
    }

    Ok(())
}
