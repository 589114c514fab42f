//! Single setting lookup command.

use super::Cli;
use super::load::build_proxy;
use anyhow::{Context, Result};
use confoverlay::{Value, debug};

/// Print the resolved value of `name` to stdout.
///
/// Strings are printed raw so the output can be used in shell scripts;
/// other values are printed in TOML notation.
pub fn get_setting(cli: &Cli, name: &str) -> Result<()> {
    let proxy = build_proxy(cli)?;
    let value = proxy
        .get(name)
        .with_context(|| format!("cannot resolve `{name}`"))?;
    if let Some(layer) = proxy.source(name) {
        debug!("get"; "`{}` from {} layer", name, layer);
    }
    println!("{}", render(&value));
    Ok(())
}

/// Render a value for terminal output.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
