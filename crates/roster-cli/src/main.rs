//! Roster CLI
//!
//! Command-line interface for the character catalog.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::PathOverrides;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} logging disabled: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let Some(cmd) = cli.command else {
        println!("{} Character roster CLI", "roster".green().bold());
        println!();
        println!("Run {} for available commands.", "roster --help".cyan());
        return Ok(());
    };

    let overrides = PathOverrides {
        config: cli.config,
        data: cli.data,
        audit_log: cli.audit_log,
    };
    let cwd = std::env::current_dir()?;
    execute_command(&cwd, &overrides, cmd)
}

fn execute_command(cwd: &Path, overrides: &PathOverrides, cmd: Commands) -> Result<()> {
    // Resolved per command, so the registry listing runs without a config.
    let config = || context::resolve_config(cwd, overrides);

    match cmd {
        Commands::Create { key, fields } => commands::run_create(&config()?, key, fields),
        Commands::Show { key } => commands::run_show(&config()?, &key),
        Commands::Update { key, fields } => commands::run_update(&config()?, &key, fields),
        Commands::Deactivate { key } => commands::run_deactivate(&config()?, &key),
        Commands::Delete { key } => commands::run_delete(&config()?, &key),
        Commands::List { json } => commands::run_list(&config()?, json),
        Commands::Report { kind } => commands::run_report(&config()?, cwd, kind),
        Commands::Factions => commands::run_factions(),
        Commands::Log => commands::run_log(&config()?),
    }
}
