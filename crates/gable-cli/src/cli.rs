//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{access, auth, site, user};

/// Command line client for gable panel administration.
#[derive(Parser, Debug)]
#[command(name = "gable")]
#[command(author, version = env!("GABLE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Panel base URL
    #[arg(
        long,
        env = "GABLE_BASE",
        default_value = "http://localhost:8080",
        global = true
    )]
    pub base: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in to the panel
    Login(auth::login::LoginArgs),

    /// Register a new account with a starter site
    Register(auth::register::RegisterArgs),

    /// Discard the stored session
    Logout(auth::logout::LogoutArgs),

    /// Show the logged-in user
    Whoami(auth::whoami::WhoamiArgs),

    /// Rotate the session tokens
    Refresh(auth::refresh::RefreshArgs),

    /// Site operations
    Site(site::SiteCommand),

    /// User administration
    User(user::UserCommand),

    /// Site access administration
    Access(access::AccessCommand),
}
