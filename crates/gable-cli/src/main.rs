//! gable - CLI client for a gable panel.
//!
//! This is a thin wrapper over the `gable-http` library, intended for
//! administering a panel deployment from the terminal.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{access, auth, site, user};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let base = cli.base;
    match cli.command {
        Commands::Login(args) => auth::login::run(&base, args).await,
        Commands::Register(args) => auth::register::run(&base, args).await,
        Commands::Logout(args) => auth::logout::run(&base, args).await,
        Commands::Whoami(args) => auth::whoami::run(&base, args).await,
        Commands::Refresh(args) => auth::refresh::run(&base, args).await,
        Commands::Site(cmd) => site::handle(&base, cmd).await,
        Commands::User(cmd) => user::handle(&base, cmd).await,
        Commands::Access(cmd) => access::handle(&base, cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
