//! Shared settings types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | `SettingsError` returned by the proxy        |
//! | `report` | Validation diagnostics and the report map    |

mod error;
mod report;

use rustc_hash::FxHashMap;

pub use error::SettingsError;
pub use report::{Diagnostic, DiagnosticKind, Report};

/// A setting value: string, number, boolean, array or table.
pub type Value = toml::Value;

/// Name-keyed settings, as supplied by the application or a user.
pub type SettingsMap = FxHashMap<String, Value>;
