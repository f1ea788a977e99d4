//! User administration subcommands.

mod create;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// List all accounts (admin only)
    List(list::ListArgs),

    /// Create an account (admin only)
    Create(create::CreateArgs),
}

pub async fn handle(base: &str, cmd: UserCommand) -> Result<()> {
    match cmd.command {
        UserSubcommand::List(args) => list::run(base, args).await,
        UserSubcommand::Create(args) => create::run(base, args).await,
    }
}
