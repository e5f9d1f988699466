//! Roster CLI
//!
//! Interactive menu for maintaining departments, roles and employees.

use anyhow::Context;
use clap::Parser;
use roster_core::logging_facility;
use roster_engine::{LinePrompter, Session, TableRenderer};
use std::io;
use std::path::PathBuf;

mod config;

use config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - departments, roles and employees from the terminal", long_about = None)]
struct Cli {
    /// Configuration file (default: ./roster.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging_facility::init(config.logging.profile, &config.logging.filter);

    let mut conn = roster_store::db::connect(&config.connection)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    roster_store::migrations::apply_migrations(&mut conn)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    tracing::debug!(database = %config.connection.database, "store ready");

    let stdin = io::stdin();
    let mut session = Session::new(
        conn,
        LinePrompter::new(stdin.lock(), io::stdout()),
        TableRenderer::new(io::stdout()),
        io::stdout(),
    );
    tracing::info!(session_id = %session.id(), "session started");

    session.run().context("Failed to write to the terminal")?;
    session
        .close()
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    Ok(())
}
