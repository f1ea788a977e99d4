//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(base: &str, _args: LogoutArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    // Purely local: the panel holds no server-side session to revoke.
    client.logout().await;

    output::success("Logged out");

    Ok(())
}
