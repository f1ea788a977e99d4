//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use gable_core::Credentials;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Email address for the new account
    #[arg(long)]
    pub email: String,

    /// Password for the new account
    #[arg(long)]
    pub password: String,
}

pub async fn run(base: &str, args: RegisterArgs) -> Result<()> {
    let client = session::panel_client(base)?;
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Registering account...".dimmed());

    let site = client
        .register(&credentials)
        .await
        .context("Failed to register")?;

    output::success("Account created and logged in");
    println!();
    output::field("Email", &args.email);
    output::field("Starter site", &site.slug);
    output::field("Status", &site.status);

    Ok(())
}
