//! Settings overlay and validation.
//!
//! # Module Structure
//!
//! ```text
//! settings/
//! ├── types/       # Value aliases, SettingsError, Report
//! ├── defaults     # Immutable application defaults
//! ├── expand       # PATH/FILE naming convention and expansion
//! ├── proxy        # SettingsProxy (runtime > local > default)
//! ├── rules        # Renamed / dropped setting table
//! └── validate     # Validator and validate_settings
//! ```
//!
//! # Diagnostics
//!
//! | Kind              | Message                                                 |
//! |-------------------|---------------------------------------------------------|
//! | renamed           | `Deprecated setting. Use <NEW_NAME>.`                   |
//! | deprecated value  | `Deprecated setting value. "<value>" is no longer available.` |
//! | dropped           | `Deprecated setting. It may be removed.`                |
//! | unknown           | `Unknown setting. Is it misspelled?`                    |

mod defaults;
pub mod expand;
mod proxy;
mod rules;
pub mod types;
mod validate;

pub use defaults::Defaults;
pub use proxy::{Layer, SettingsProxy};
pub use rules::{BUILTIN_RULES, Rule};
pub use types::{Diagnostic, DiagnosticKind, Report, SettingsError, SettingsMap, Value};
pub use validate::{Validator, validate_settings};
