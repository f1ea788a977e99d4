//! Create user command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Email address for the new account
    #[arg(long)]
    pub email: String,

    /// Password for the new account
    #[arg(long)]
    pub password: String,

    /// Global role to assign (e.g. admin, user)
    #[arg(long)]
    pub role: Option<String>,
}

pub async fn run(base: &str, args: CreateArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    eprintln!("{}", "Creating user...".dimmed());

    let user = client
        .create_user(&args.email, &args.password, args.role.as_deref())
        .await
        .context("Failed to create user")?;

    output::success(&format!("Created user: {}", user.email));
    output::field("ID", &user.id);
    if !user.global_role.is_empty() {
        output::field("Role", &user.global_role);
    }

    Ok(())
}
