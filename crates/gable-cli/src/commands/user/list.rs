//! List users command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output each user as a JSON line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(base: &str, args: ListArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    let users = client.users().await.context("Failed to list users")?;

    if users.is_empty() {
        eprintln!("{}", "No users found.".dimmed());
        return Ok(());
    }

    for user in &users {
        if args.json {
            output::json(user)?;
        } else {
            println!("{}  {}", user.email.bold(), user.global_role);
        }
    }

    Ok(())
}
