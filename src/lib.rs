//! schedlog library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (store, alerts, export).

pub mod alerts;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Alerts { .. } => cli::commands::alerts::handle(&cli.command, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg),
        Commands::Users { .. } => cli::commands::users::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply command-line overrides
    let mut cfg = Config::load();

    if let Some(events_file) = &cli.events_file {
        cfg.events_file = events_file.clone();
    }
    if let Some(users_file) = &cli.users_file {
        cfg.users_file = users_file.clone();
    }

    dispatch(&cli, &cfg)
}
