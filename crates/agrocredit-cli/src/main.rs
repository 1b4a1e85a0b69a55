//! Agrocredit CLI - Command-line interface for the agrocredit calculation engine.

use agrocredit_cli::commands;
use agrocredit_cli::{Cli, Command, Config, Formatter};
use agrocredit_engine::Engine;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> agrocredit_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("AGROCREDIT_LOG")
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let engine = Engine::from_config(&config.engine)?;
    debug!(species = engine.species_table().len(), "Engine ready");

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled, config.settings.decimals);

    match cli.command {
        Command::Agroforestry(args) => {
            commands::execute_agroforestry(args, &engine, &formatter)?;
        }
        Command::Rice(args) => {
            commands::execute_rice(args, &engine, &formatter)?;
        }
        Command::Calculate(args) => {
            commands::execute_calculate(args, &engine, &formatter)?;
        }
        Command::Species => {
            commands::execute_species(&engine, &formatter)?;
        }
    }

    Ok(())
}
