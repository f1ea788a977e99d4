//! Grant site access command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct GrantArgs {
    /// Site id
    pub site: String,

    /// Email of the user to grant access to
    #[arg(long)]
    pub email: String,

    /// Role within the site (e.g. owner, editor)
    #[arg(long, default_value = "editor")]
    pub role: String,

    /// Create the account first if it does not exist
    #[arg(long)]
    pub create_if_missing: bool,
}

pub async fn run(base: &str, args: GrantArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    client
        .grant_site_access(&args.site, &args.email, &args.role, args.create_if_missing)
        .await
        .context("Failed to grant access")?;

    output::success(&format!("Granted {} access to {}", args.role, args.email));

    Ok(())
}
