//! Whoami command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(base: &str, _args: WhoamiArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    if !client.is_authenticated().await {
        bail!("No active session. Run 'gable login' first.");
    }

    let profile = client.me().await.context("Failed to fetch profile")?;

    output::field("ID", &profile.id);
    output::field("Email", &profile.email);
    output::field("Role", &profile.global_role);

    Ok(())
}
