use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use meili_cli::{commands, Cli, Dependencies};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads MEILI_* variables
    dotenv::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let dependencies = Dependencies::new(&cli.connection).context("Failed to initialize client")?;

    info!(command = ?cli.command, "Running command");
    let output = commands::run(&dependencies.client, cli.command)
        .await
        .map_err(|e| {
            error!(error = %e, "Command failed");
            e
        })
        .context("Command failed")?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Log to stderr, as JSON when `LOG_FORMAT=json`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}
