//! List sites command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output each site as a JSON line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(base: &str, args: ListArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    let sites = client.sites().await.context("Failed to list sites")?;

    if sites.is_empty() {
        eprintln!("{}", "No sites found.".dimmed());
        return Ok(());
    }

    for site in &sites {
        if args.json {
            output::json(site)?;
        } else {
            println!(
                "{}  {}  {}",
                site.slug.bold(),
                site.status,
                site.name.dimmed()
            );
        }
    }

    Ok(())
}
