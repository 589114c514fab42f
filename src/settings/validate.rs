//! Settings validation against defaults and deprecation rules.
//!
//! Validation is a pure classification pass: it never mutates its inputs
//! and never fails. Every problem becomes an entry in the [`Report`].

use super::defaults::Defaults;
use super::rules::{BUILTIN_RULES, Rule};
use super::types::{Diagnostic, Report, SettingsMap, Value};

/// Classifies supplied settings using an ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    rules: &'r [Rule],
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new(BUILTIN_RULES)
    }
}

impl<'r> Validator<'r> {
    pub const fn new(rules: &'r [Rule]) -> Self {
        Self { rules }
    }

    pub const fn rules(&self) -> &'r [Rule] {
        self.rules
    }

    /// Validate every entry of `candidate`.
    ///
    /// The report has exactly one entry per offending name; valid names
    /// produce nothing.
    pub fn validate(&self, defaults: &Defaults, candidate: &SettingsMap) -> Report {
        let mut report = Report::new();
        for (name, value) in candidate {
            if let Some(diagnostic) = self.classify(defaults, name, value) {
                report.insert(name.as_str(), diagnostic);
            }
        }
        report
    }

    /// Classify a single setting. First matching rule wins; a name that no
    /// rule knows and the defaults lack is unknown.
    pub fn classify(&self, defaults: &Defaults, name: &str, value: &Value) -> Option<Diagnostic> {
        if let Some(diagnostic) = self.rules.iter().find_map(|rule| rule.check(name, value)) {
            return Some(diagnostic);
        }
        (!defaults.contains(name)).then(Diagnostic::unknown)
    }
}

/// Validate `candidate` against `defaults` using [`BUILTIN_RULES`].
pub fn validate_settings(defaults: &Defaults, candidate: &SettingsMap) -> Report {
    Validator::default().validate(defaults, candidate)
}
