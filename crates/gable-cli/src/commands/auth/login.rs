//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use gable_core::Credentials;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address to authenticate with
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(base: &str, args: LoginArgs) -> Result<()> {
    let client = session::panel_client(base)?;
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    client
        .login(&credentials)
        .await
        .context("Failed to log in")?;

    output::success("Logged in successfully");
    println!();
    output::field("Email", &args.email);
    output::field("Panel", client.auth().base().as_str());

    Ok(())
}
