//! Site access administration subcommands.

mod grant;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AccessCommand {
    #[command(subcommand)]
    pub command: AccessSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AccessSubcommand {
    /// List the users of a site (admin only)
    List(list::ListArgs),

    /// Grant a user access to a site (admin only)
    Grant(grant::GrantArgs),
}

pub async fn handle(base: &str, cmd: AccessCommand) -> Result<()> {
    match cmd.command {
        AccessSubcommand::List(args) => list::run(base, args).await,
        AccessSubcommand::Grant(args) => grant::run(base, args).await,
    }
}
