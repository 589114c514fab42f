//! Loading defaults and settings files for the command line.
//!
//! Both files are flat TOML tables of `NAME = value` pairs:
//!
//! ```toml
//! MPD_SERVER_HOSTNAME = "::"
//! MPD_SERVER_PORT = 6600
//! LOCAL_MUSIC_PATH = "~/music"
//! ```

use super::Cli;
use anyhow::{Context, Result, bail};
use confoverlay::{Defaults, SettingsError, SettingsMap, SettingsProxy, debug};
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a flat TOML table into settings.
pub fn parse_table(content: &str) -> Result<SettingsMap, toml::de::Error> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(table.into_iter().collect())
}

/// Read a settings file.
pub fn read_table(path: &Path) -> Result<SettingsMap, SettingsError> {
    let content =
        fs::read_to_string(path).map_err(|e| SettingsError::Io(path.to_path_buf(), e))?;
    Ok(parse_table(&content)?)
}

/// [`read_table`], with the path attached for the command line.
pub fn load_table(path: &Path) -> Result<SettingsMap> {
    read_table(path).with_context(|| format!("failed to load `{}`", path.display()))
}

/// Locate and read the defaults file.
pub fn load_defaults(cli: &Cli) -> Result<Defaults> {
    let Some(path) = find_file(&cli.defaults) else {
        bail!(
            "defaults file `{}` not found in this directory or any parent",
            cli.defaults.display()
        );
    };
    debug!("load"; "defaults from {}", path.display());
    let defaults = Defaults::new(load_table(&path)?);
    if defaults.is_empty() {
        bail!("defaults file `{}` defines no settings", path.display());
    }
    Ok(defaults)
}

/// Build the proxy: defaults, then `--settings`, then `--set` overrides.
pub fn build_proxy(cli: &Cli) -> Result<SettingsProxy> {
    let defaults = load_defaults(cli)?;
    let local = match &cli.settings {
        Some(path) => load_table(path)?,
        None => SettingsMap::default(),
    };
    let mut proxy = SettingsProxy::with_local(defaults, local);
    for (name, value) in &cli.set {
        proxy.set(name.as_str(), value.clone());
    }
    Ok(proxy)
}

/// Find a file by searching upward from the current directory.
///
/// Absolute paths are returned as-is when they exist. Relative paths are
/// tried in the current directory, then in each parent.
///
/// # Example
/// ```text
/// /srv/player/conf/     ← cwd
/// /srv/player/defaults.toml ← found!
/// ```
pub fn find_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }
    let cwd = std::env::current_dir().ok()?;
    find_file_from(&cwd, name)
}

fn find_file_from(start: &Path, name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.exists())
}
