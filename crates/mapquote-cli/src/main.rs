//! MapQuote command-line calculator
//!
//! Price and delivery quotes for custom map orders

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};
use config::AppConfig;

fn main() -> Result<()> {
    // Logs go to stderr so quotes on stdout stay machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    info!("Starting MapQuote v{}", mapquote_common::VERSION);

    let config = AppConfig::load(cli.config.as_deref())?;
    info!(
        feature_days = ?config.engine.feature_days,
        delivery = ?config.engine.delivery,
        "Loaded configuration"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Quote(args) => commands::quote(&config, &args, &mut out),
        Command::Catalog { json } => commands::catalog(&config, json, &mut out),
    }
}
