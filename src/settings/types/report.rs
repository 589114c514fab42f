//! Validation diagnostics.

use crate::utils::plural_count;
use owo_colors::{OwoColorize, Stream};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Diagnostic
// ============================================================================

/// Why a supplied setting was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Legacy name with a modern replacement.
    Renamed,
    /// Known setting carrying a value that no longer exists.
    DeprecatedValue,
    /// Setting removed without replacement.
    Dropped,
    /// Neither a default nor a known legacy name.
    Unknown,
}

impl DiagnosticKind {
    /// Get kind label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Renamed => "renamed",
            Self::DeprecatedValue => "deprecated value",
            Self::Dropped => "deprecated",
            Self::Unknown => "unknown",
        }
    }
}

/// A single diagnostic for one setting name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn renamed(replacement: &str) -> Self {
        Self {
            kind: DiagnosticKind::Renamed,
            message: format!("Deprecated setting. Use {replacement}."),
        }
    }

    pub fn deprecated_value(value: &str) -> Self {
        Self {
            kind: DiagnosticKind::DeprecatedValue,
            message: format!("Deprecated setting value. \"{value}\" is no longer available."),
        }
    }

    pub fn dropped() -> Self {
        Self {
            kind: DiagnosticKind::Dropped,
            message: "Deprecated setting. It may be removed.".to_string(),
        }
    }

    pub fn unknown() -> Self {
        Self {
            kind: DiagnosticKind::Unknown,
            message: "Unknown setting. Is it misspelled?".to_string(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// Report
// ============================================================================

/// Diagnostics keyed by offending setting name.
///
/// Built fresh for every validation pass. An absent name means no problem
/// was found for it, or it was never supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: BTreeMap<String, Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, replacing any earlier one for the same name.
    pub fn insert(&mut self, name: impl Into<String>, diagnostic: Diagnostic) {
        self.entries.insert(name.into(), diagnostic);
    }

    /// Diagnostic message for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(Diagnostic::message)
    }

    pub fn diagnostic(&self, name: &str) -> Option<&Diagnostic> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by setting name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Diagnostic)> {
        self.entries.iter().map(|(name, d)| (name.as_str(), d))
    }

    /// Count of entries of one kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.values().filter(|d| d.kind == kind).count()
    }

    /// `NAME: message` lines, sorted by name.
    pub fn to_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(name, d)| format!("{name}: {}", d.message))
            .collect()
    }

    /// Plain `name -> message` map.
    pub fn into_messages(self) -> BTreeMap<String, String> {
        self.entries
            .into_iter()
            .map(|(name, d)| (name, d.message))
            .collect()
    }

    /// Convert to Result (returns Err if anything was flagged).
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Print the report to stderr with colored names, one block per setting.
    pub fn print(&self) {
        for (name, d) in self.iter() {
            eprintln!(
                "{}{}{}",
                "[".if_supports_color(Stream::Stderr, |t| t.dimmed()),
                name.if_supports_color(Stream::Stderr, |t| t.cyan()),
                "]".if_supports_color(Stream::Stderr, |t| t.dimmed()),
            );
            eprintln!(
                "{} {} {}",
                "→".if_supports_color(Stream::Stderr, |t| t.red()),
                d.message,
                format!("({})", d.kind.label()).if_supports_color(Stream::Stderr, |t| t.dimmed()),
            );
        }
        if !self.is_empty() {
            eprintln!();
            eprintln!(
                "{} {}",
                "found".if_supports_color(Stream::Stderr, |t| t.dimmed()),
                plural_count(self.len(), "problem")
            );
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_lines().join("\n"))
    }
}

impl std::error::Error for Report {}

impl<'a> IntoIterator for &'a Report {
    type Item = (&'a String, &'a Diagnostic);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
