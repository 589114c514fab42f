//! Effective settings listing command.

use super::Cli;
use super::get::render;
use super::load::build_proxy;
use anyhow::Result;
use confoverlay::{Layer, SettingsProxy, Value};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// One row of the listing.
#[derive(Debug, Serialize)]
struct ListedSetting<'a> {
    name: &'a str,
    value: Value,
    layer: &'static str,
}

/// Print every effective setting with the layer it comes from.
pub fn list_settings(cli: &Cli, json: bool, pretty: bool) -> Result<()> {
    let proxy = build_proxy(cli)?;
    let current = proxy.masked_current();
    let rows = collect_rows(&proxy, &current);

    if json {
        let output = if pretty {
            serde_json::to_string_pretty(&rows)?
        } else {
            serde_json::to_string(&rows)?
        };
        println!("{output}");
        return Ok(());
    }

    let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    for row in &rows {
        println!(
            "{:<width$} = {} {}",
            row.name,
            render(&row.value),
            format!("({})", row.layer).if_supports_color(Stream::Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

fn collect_rows<'a>(
    proxy: &SettingsProxy,
    current: &'a std::collections::BTreeMap<String, Value>,
) -> Vec<ListedSetting<'a>> {
    let layers = proxy.layered();
    current
        .iter()
        .map(|(name, value)| ListedSetting {
            name,
            value: value.clone(),
            layer: layers
                .get(name.as_str())
                .map_or(Layer::Default.label(), Layer::label),
        })
        .collect()
}
