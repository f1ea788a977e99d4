//! List site users command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Site id
    pub site: String,

    /// Output each membership as a JSON line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(base: &str, args: ListArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    let members = client
        .site_users(&args.site)
        .await
        .context("Failed to list site users")?;

    if members.is_empty() {
        eprintln!("{}", "No users have access to this site.".dimmed());
        return Ok(());
    }

    for member in &members {
        if args.json {
            output::json(member)?;
        } else {
            println!("{}  {}", member.email.bold(), member.role);
        }
    }

    Ok(())
}
