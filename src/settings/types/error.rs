//! Settings error types.

use super::Report;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`SettingsProxy`](crate::SettingsProxy).
///
/// Writes never fail; only reads of unknown names, explicit validation and
/// loading a settings file produce errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Setting \"{0}\" is not set.")]
    NotFound(String),

    #[error("Setting \"{name}\" is not a {expected}.")]
    Type { name: String, expected: &'static str },

    // NOTE: No #[from] here - the report is rendered inline, not as a source
    #[error("Settings validation failed.\n{0}")]
    Validation(Report),

    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Settings file parsing error")]
    Toml(#[from] toml::de::Error),
}

impl SettingsError {
    /// Name of the setting this error refers to, if any.
    pub fn setting(&self) -> Option<&str> {
        match self {
            Self::NotFound(name) | Self::Type { name, .. } => Some(name),
            Self::Validation(_) | Self::Io(..) | Self::Toml(_) => None,
        }
    }
}
