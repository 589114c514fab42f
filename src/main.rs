//! Confoverlay - inspect and validate layered application settings.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    confoverlay::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check { file, warn_only } => {
            cli::check::check_settings(&cli, file.as_deref(), *warn_only)
        }
        Commands::Get { name } => cli::get::get_setting(&cli, name),
        Commands::List { json, pretty } => cli::list::list_settings(&cli, *json, *pretty),
    }
}
