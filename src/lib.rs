//! geopunch library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod location;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cli),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Distance { .. } => cli::commands::distance::handle(&cli.command),
        Commands::Track { .. } => cli::commands::track::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; --config overrides the file location.
    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
