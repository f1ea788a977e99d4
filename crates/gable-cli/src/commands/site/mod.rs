//! Site subcommand implementations.

mod create;
mod get;
mod list;
mod publish;
mod set_content;
mod unpublish;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct SiteCommand {
    #[command(subcommand)]
    pub command: SiteSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SiteSubcommand {
    /// List sites visible to the logged-in user
    List(list::ListArgs),

    /// Show a single site
    Get(get::GetArgs),

    /// Create a new site
    Create(create::CreateArgs),

    /// Replace the draft content of a site
    SetContent(set_content::SetContentArgs),

    /// Publish a site
    Publish(publish::PublishArgs),

    /// Revert a site to draft
    Unpublish(unpublish::UnpublishArgs),
}

pub async fn handle(base: &str, cmd: SiteCommand) -> Result<()> {
    match cmd.command {
        SiteSubcommand::List(args) => list::run(base, args).await,
        SiteSubcommand::Get(args) => get::run(base, args).await,
        SiteSubcommand::Create(args) => create::run(base, args).await,
        SiteSubcommand::SetContent(args) => set_content::run(base, args).await,
        SiteSubcommand::Publish(args) => publish::run(base, args).await,
        SiteSubcommand::Unpublish(args) => unpublish::run(base, args).await,
    }
}
