//! Set site content command implementation.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct SetContentArgs {
    /// Site id
    pub id: String,

    /// JSON file with the new content (use - for stdin)
    #[arg(long)]
    pub json: String,
}

pub async fn run(base: &str, args: SetContentArgs) -> Result<()> {
    let client = session::panel_client(base)?;

    let content: Value = if args.json == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        serde_json::from_str(&buf).context("Invalid JSON from stdin")?
    } else {
        let raw = std::fs::read_to_string(&args.json).context("Failed to read JSON file")?;
        serde_json::from_str(&raw).context("Invalid JSON in file")?
    };

    client
        .update_site_content(&args.id, &content)
        .await
        .context("Failed to update site content")?;

    output::success("Content updated");

    Ok(())
}
