//! Settings file check command.

use super::Cli;
use super::load::{load_defaults, load_table};
use anyhow::{Result, bail};
use confoverlay::{DiagnosticKind, log, utils::plural_count, validate_settings};
use std::path::Path;

/// Validate a settings file against the defaults and print the report.
pub fn check_settings(cli: &Cli, file: Option<&Path>, warn_only: bool) -> Result<()> {
    let Some(path) = file.or(cli.settings.as_deref()) else {
        bail!("no settings file given, pass FILE or --settings");
    };

    let defaults = load_defaults(cli)?;
    let candidate = load_table(path)?;
    log!("check"; "checking {} in {}", plural_count(candidate.len(), "setting"), path.display());

    let report = validate_settings(&defaults, &candidate);
    if report.is_empty() {
        log!("check"; "no problems found");
        return Ok(());
    }

    report.print();

    let deprecated = report.len() - report.count(DiagnosticKind::Unknown);
    if deprecated > 0 {
        log!("warning"; "{} deprecated, update before the next release", plural_count(deprecated, "setting"));
    }

    if warn_only {
        return Ok(());
    }
    bail!("{} in {}", plural_count(report.len(), "problem"), path.display())
}
