//! Rename and removal rules for legacy settings.
//!
//! Rules are checked in table order and the first match wins, so
//! [`BUILTIN_RULES`] lists renames first, then removed values, then
//! settings dropped without replacement.

use super::types::{Diagnostic, DiagnosticKind, Value};

/// A single deprecation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `name` was renamed to `replacement`.
    Renamed {
        name: &'static str,
        replacement: &'static str,
    },
    /// `value` is no longer accepted for `name`.
    ///
    /// Matches a string equal to `value`, or an array containing it.
    DroppedValue {
        name: &'static str,
        value: &'static str,
    },
    /// `name` was removed without a replacement.
    Dropped { name: &'static str },
}

impl Rule {
    /// Setting name this rule applies to.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Renamed { name, .. } | Self::DroppedValue { name, .. } | Self::Dropped { name } => {
                *name
            }
        }
    }

    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::Renamed { .. } => DiagnosticKind::Renamed,
            Self::DroppedValue { .. } => DiagnosticKind::DeprecatedValue,
            Self::Dropped { .. } => DiagnosticKind::Dropped,
        }
    }

    /// Check one supplied setting against this rule.
    pub fn check(&self, name: &str, value: &Value) -> Option<Diagnostic> {
        if name != self.name() {
            return None;
        }
        match *self {
            Self::Renamed { replacement, .. } => Some(Diagnostic::renamed(replacement)),
            Self::DroppedValue { value: dropped, .. } => {
                holds_value(value, dropped).then(|| Diagnostic::deprecated_value(dropped))
            }
            Self::Dropped { .. } => Some(Diagnostic::dropped()),
        }
    }
}

/// Whether `value` is `needle` or a sequence containing it.
fn holds_value(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(s) => s == needle,
        Value::Array(items) => items.iter().any(|item| item.as_str() == Some(needle)),
        _ => false,
    }
}

const fn renamed(name: &'static str, replacement: &'static str) -> Rule {
    Rule::Renamed { name, replacement }
}

const fn dropped(name: &'static str) -> Rule {
    Rule::Dropped { name }
}

/// Settings that changed between releases of the application.
pub const BUILTIN_RULES: &[Rule] = &[
    renamed("DUMP_LOG_FILENAME", "DEBUG_LOG_FILENAME"),
    renamed("DUMP_LOG_FORMAT", "DEBUG_LOG_FORMAT"),
    renamed("FRONTEND", "FRONTENDS"),
    renamed("GSTREAMER_AUDIO_SINK", "OUTPUT"),
    renamed("LOCAL_MUSIC_FOLDER", "LOCAL_MUSIC_PATH"),
    renamed("LOCAL_OUTPUT_OVERRIDE", "OUTPUT"),
    renamed("LOCAL_PLAYLIST_FOLDER", "LOCAL_PLAYLIST_PATH"),
    renamed("LOCAL_TAG_CACHE", "LOCAL_TAG_CACHE_FILE"),
    renamed("SERVER_HOSTNAME", "MPD_SERVER_HOSTNAME"),
    renamed("SERVER_PORT", "MPD_SERVER_PORT"),
    renamed("SPOTIFY_HIGH_BITRATE", "SPOTIFY_BITRATE"),
    renamed("SPOTIFY_LIB_CACHE", "SPOTIFY_CACHE_PATH"),
    Rule::DroppedValue {
        name: "BACKENDS",
        value: "mopidy.backends.despotify.DespotifyBackend",
    },
    dropped("MIXER_ALSA_CONTROL"),
    dropped("MIXER_EXT_PORT"),
    dropped("MIXER_EXT_SPEAKERS_A"),
    dropped("MIXER_EXT_SPEAKERS_B"),
    dropped("MIXER_MAX_VOLUME"),
    dropped("SERVER"),
    dropped("SPOTIFY_LIB_APPKEY"),
];
