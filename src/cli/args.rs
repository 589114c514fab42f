//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use confoverlay::Value;
use std::path::PathBuf;

/// Inspect and validate layered application settings
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Defaults file, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "defaults.toml", value_hint = clap::ValueHint::FilePath)]
    pub defaults: PathBuf,

    /// User settings file layered over the defaults
    #[arg(short = 'S', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub settings: Option<PathBuf>,

    /// Runtime override, may be repeated (value is parsed as TOML, else taken as a string)
    #[arg(short, long = "set", global = true, value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, Value)>,

    /// Show which layer each value is resolved from
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check a settings file for unknown, renamed or deprecated entries
    #[command(visible_alias = "c")]
    Check {
        /// Settings file to check (defaults to --settings)
        #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Report problems without failing
        #[arg(long, short = 'w')]
        warn_only: bool,
    },

    /// Print the resolved value of one setting
    #[command(visible_alias = "g")]
    Get {
        /// Setting name, e.g. LOCAL_MUSIC_PATH
        name: String,
    },

    /// List the effective settings (passwords masked)
    #[command(visible_alias = "l")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },
}

/// Parse a `NAME=VALUE` override.
///
/// `VALUE` is read as a TOML value (`6600`, `true`, `["a", "b"]`); anything
/// that does not parse as exactly one value is kept as a plain string.
pub fn parse_assignment(raw: &str) -> Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing setting name in `{raw}`"));
    }
    Ok((name.to_string(), parse_value(value)))
}

fn parse_value(raw: &str) -> Value {
    // A newline in `raw` could smuggle in further keys
    let parsed = match toml::from_str::<toml::Table>(&format!("v = {raw}")) {
        Ok(mut table) if table.len() == 1 => table.remove("v"),
        _ => None,
    };
    parsed.unwrap_or_else(|| Value::String(raw.to_string()))
}
