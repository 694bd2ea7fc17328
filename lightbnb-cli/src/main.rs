//! lightbnb CLI - operator access to the LightBnB data layer
//!
//! Runs one data-access operation per invocation and prints the rows as JSON:
//! - User lookup and creation (`user`)
//! - A guest's reservations (`reservations`)
//! - Property search and creation (`properties`, `property`)
//!
//! Connection settings come from `LIGHTBNB_DB_*` / `DATABASE_URL`, optionally
//! via a `.env` file in the working directory.

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{DbConfig, LightBnb};

mod commands;
mod tracing_setup;

use commands::Commands;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and update the LightBnB rental database",
    long_about = "Look up users, list reservations, search and add properties. \
                  Output is JSON on stdout; logs go to stderr."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Database URL (overrides LIGHTBNB_DB_* settings and DATABASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();
    lightbnb_db::config::load_dotenv();

    let mut config = DbConfig::from_env().context("Invalid database configuration")?;
    if let Some(url) = cli.database_url {
        config.url = Some(url);
    }
    tracing::debug!(?config, "database configuration");

    let db = LightBnb::connect(&config)
        .await
        .context("Failed to connect to database")?;

    let outcome = commands::run(&db, cli.command).await;
    db.close().await;
    outcome
}
