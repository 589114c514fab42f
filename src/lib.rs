//! Confoverlay - layered application settings with deprecation-aware validation.
//!
//! Two pieces do the work:
//!
//! - [`SettingsProxy`] resolves a setting from runtime overrides, then the
//!   local settings layer, then the application defaults. Names ending in
//!   `PATH` or `FILE` are expanded to absolute paths on every read.
//! - [`validate_settings`] classifies a candidate settings map against the
//!   defaults and a table of renamed and removed settings.
//!
//! ```ignore
//! use confoverlay::{Defaults, SettingsProxy, validate_settings};
//!
//! let defaults = Defaults::from_iter([("MPD_SERVER_PORT", 6600)]);
//! let report = validate_settings(&defaults, &user_settings);
//!
//! let mut settings = SettingsProxy::new(defaults);
//! settings.set("MPD_SERVER_PORT", 6601);
//! ```

pub mod logger;
pub mod settings;
pub mod utils;

pub use settings::{
    BUILTIN_RULES, Defaults, Diagnostic, DiagnosticKind, Layer, Report, Rule, SettingsError,
    SettingsMap, SettingsProxy, Validator, Value, validate_settings,
};
