//! Layered read/write access to settings.
//!
//! Resolution order, highest first:
//!
//! | Layer     | Source                                   | Mutable |
//! |-----------|------------------------------------------|---------|
//! | `runtime` | `set()` calls during this process        | yes     |
//! | `local`   | the user's settings, given at startup    | no      |
//! | `default` | application defaults                     | no      |

use super::defaults::Defaults;
use super::expand::{MASK, expand_setting, is_secret_setting};
use super::types::{Report, SettingsError, SettingsMap, Value};
use super::validate::validate_settings;
use crate::{debug, log};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Layer a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Default,
    Local,
    Runtime,
}

impl Layer {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Local => "local",
            Self::Runtime => "runtime",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings proxy over application defaults.
///
/// Writes go to an in-memory runtime layer owned by this proxy and are
/// never validated; call [`validate_settings`] before trusting user input.
/// `set` and `remove` take `&mut self`, so sharing a proxy across threads
/// needs external synchronization.
#[derive(Debug, Clone)]
pub struct SettingsProxy {
    defaults: Arc<Defaults>,
    local: SettingsMap,
    runtime: SettingsMap,
}

impl SettingsProxy {
    pub fn new(defaults: impl Into<Arc<Defaults>>) -> Self {
        Self::with_local(defaults, SettingsMap::default())
    }

    /// Proxy with the user's settings layered over the defaults.
    pub fn with_local(defaults: impl Into<Arc<Defaults>>, local: SettingsMap) -> Self {
        Self {
            defaults: defaults.into(),
            local,
            runtime: SettingsMap::default(),
        }
    }

    // ========================================================================
    // reads
    // ========================================================================

    /// Resolve `name`, expanding path-like settings.
    pub fn get(&self, name: &str) -> Result<Value, SettingsError> {
        let (layer, value) = self
            .lookup(name)
            .ok_or_else(|| SettingsError::NotFound(name.to_string()))?;
        debug!("settings"; "`{}` resolved from {} layer", name, layer);
        Ok(expand_setting(name, value))
    }

    /// Resolve `name` as a string.
    pub fn get_str(&self, name: &str) -> Result<String, SettingsError> {
        match self.get(name)? {
            Value::String(s) => Ok(s),
            _ => Err(SettingsError::Type {
                name: name.to_string(),
                expected: "string",
            }),
        }
    }

    /// Whether `name` is set in any layer.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Layer that currently provides `name`.
    pub fn source(&self, name: &str) -> Option<Layer> {
        self.lookup(name).map(|(layer, _)| layer)
    }

    fn lookup(&self, name: &str) -> Option<(Layer, &Value)> {
        self.runtime
            .get(name)
            .map(|v| (Layer::Runtime, v))
            .or_else(|| self.local.get(name).map(|v| (Layer::Local, v)))
            .or_else(|| self.defaults.get(name).map(|v| (Layer::Default, v)))
    }

    // ========================================================================
    // writes
    // ========================================================================

    /// Store `value` as a runtime override. Never fails.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        debug!("settings"; "runtime override for `{}`", name);
        self.runtime.insert(name, value.into());
    }

    /// Drop the runtime override for `name`, reverting to lower layers.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.runtime.remove(name)
    }

    // ========================================================================
    // views
    // ========================================================================

    /// Raw runtime overrides, not path-expanded.
    pub fn runtime(&self) -> &SettingsMap {
        &self.runtime
    }

    /// Raw local settings, not path-expanded.
    pub fn local(&self) -> &SettingsMap {
        &self.local
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Effective settings: defaults, then local, then runtime, with
    /// path-like values expanded. Computed fresh on every call.
    pub fn current(&self) -> BTreeMap<String, Value> {
        self.merged()
            .into_iter()
            .map(|(name, value)| {
                let value = expand_setting(name, value);
                (name.to_string(), value)
            })
            .collect()
    }

    /// [`current`](Self::current) with secret values masked, for display.
    pub fn masked_current(&self) -> BTreeMap<String, Value> {
        let mut current = self.current();
        for (name, value) in current.iter_mut() {
            if is_secret_setting(name) {
                *value = Value::from(MASK);
            }
        }
        current
    }

    /// Merged settings with the layer each value came from.
    pub fn layered(&self) -> BTreeMap<&str, Layer> {
        let mut layers = BTreeMap::new();
        for name in self.defaults.names() {
            layers.insert(name, Layer::Default);
        }
        for name in self.local.keys() {
            layers.insert(name.as_str(), Layer::Local);
        }
        for name in self.runtime.keys() {
            layers.insert(name.as_str(), Layer::Runtime);
        }
        layers
    }

    fn merged(&self) -> BTreeMap<&str, &Value> {
        let mut merged: BTreeMap<&str, &Value> = self.defaults.iter().collect();
        for (name, value) in self.local.iter().chain(self.runtime.iter()) {
            merged.insert(name.as_str(), value);
        }
        merged
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Problems in the local settings layer.
    pub fn errors(&self) -> Report {
        validate_settings(&self.defaults, &self.local)
    }

    /// Check the local settings layer, logging every problem found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.errors().into_result().map_err(|report| {
            log!("error"; "settings validation errors:");
            for line in report.to_lines() {
                log!("error"; "  {}", line);
            }
            SettingsError::Validation(report)
        })
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::expand::expand_path;
    use crate::utils::path::absolute_path;
    use std::path::Path;

    fn defaults() -> Defaults {
        Defaults::from_iter([
            ("MPD_SERVER_HOSTNAME", Value::from("::")),
            ("MPD_SERVER_PORT", Value::from(6600_i64)),
            ("LOCAL_MUSIC_PATH", Value::from("~/music")),
            ("SPOTIFY_PASSWORD", Value::from("hunter2")),
        ])
    }

    fn proxy() -> SettingsProxy {
        SettingsProxy::new(defaults())
    }

    fn expanded_home(rest: &str) -> Value {
        let home = shellexpand::tilde("~").into_owned();
        Value::String(
            absolute_path(&Path::new(&home).join(rest))
                .to_string_lossy()
                .into_owned(),
        )
    }

    fn cwd_join(rest: &str) -> Value {
        let cwd = std::env::current_dir().unwrap();
        Value::String(absolute_path(&cwd.join(rest)).to_string_lossy().into_owned())
    }

    // ------------------------------------------------------------------------
    // get/set
    // ------------------------------------------------------------------------

    #[test]
    fn test_set_and_get() {
        let mut settings = proxy();
        settings.set("TEST", "test");
        assert_eq!(settings.get("TEST").unwrap(), Value::from("test"));
    }

    #[test]
    fn test_set_updates_runtime_settings() {
        let mut settings = proxy();
        settings.set("TEST", "test");
        assert!(settings.runtime().contains_key("TEST"));
        assert_eq!(settings.runtime()["TEST"], Value::from("test"));
    }

    #[test]
    fn test_runtime_value_included_in_current() {
        let mut settings = proxy();
        settings.set("TEST", "test");
        assert_eq!(settings.current()["TEST"], Value::from("test"));
    }

    #[test]
    fn test_current_reflects_later_writes() {
        let mut settings = proxy();
        let before = settings.current();
        assert!(!before.contains_key("TEST"));

        settings.set("TEST", "test");
        settings.set("MPD_SERVER_PORT", 6601_i64);
        let after = settings.current();
        assert_eq!(after["TEST"], Value::from("test"));
        assert_eq!(after["MPD_SERVER_PORT"], Value::Integer(6601));
        // earlier snapshots are not live views
        assert_eq!(before["MPD_SERVER_PORT"], Value::Integer(6600));

        settings.remove("MPD_SERVER_PORT");
        assert_eq!(settings.current()["MPD_SERVER_PORT"], Value::Integer(6600));
    }

    #[test]
    fn test_default_used_when_not_overridden() {
        let settings = proxy();
        assert_eq!(settings.get("MPD_SERVER_PORT").unwrap(), Value::Integer(6600));
        assert_eq!(settings.source("MPD_SERVER_PORT"), Some(Layer::Default));
        assert!(settings.runtime().is_empty());
    }

    #[test]
    fn test_runtime_overrides_default() {
        let mut settings = proxy();
        settings.set("MPD_SERVER_PORT", 6601_i64);
        assert_eq!(settings.get("MPD_SERVER_PORT").unwrap(), Value::Integer(6601));
        assert_eq!(settings.current()["MPD_SERVER_PORT"], Value::Integer(6601));
        assert_eq!(settings.source("MPD_SERVER_PORT"), Some(Layer::Runtime));
        // defaults themselves are untouched
        assert_eq!(
            settings.defaults().get("MPD_SERVER_PORT"),
            Some(&Value::Integer(6600))
        );
    }

    #[test]
    fn test_missing_setting_is_not_found() {
        let settings = proxy();
        let err = settings.get("NOT_A_SETTING").unwrap_err();
        assert!(matches!(err, SettingsError::NotFound(ref name) if name == "NOT_A_SETTING"));
        assert!(!settings.contains("NOT_A_SETTING"));
    }

    #[test]
    fn test_set_accepts_invalid_names() {
        // validation is opt-in; writes are stored as-is
        let mut settings = proxy();
        settings.set("SERVER_HOSTNAME", "127.0.0.1");
        assert_eq!(settings.get("SERVER_HOSTNAME").unwrap(), Value::from("127.0.0.1"));
    }

    #[test]
    fn test_get_str() {
        let mut settings = proxy();
        settings.set("TEST", "test");
        assert_eq!(settings.get_str("TEST").unwrap(), "test");
        assert!(matches!(
            settings.get_str("MPD_SERVER_PORT"),
            Err(SettingsError::Type { expected: "string", .. })
        ));
    }

    #[test]
    fn test_remove_reverts_to_default() {
        let mut settings = proxy();
        settings.set("MPD_SERVER_HOSTNAME", "127.0.0.1");
        assert_eq!(
            settings.remove("MPD_SERVER_HOSTNAME"),
            Some(Value::from("127.0.0.1"))
        );
        assert_eq!(settings.get("MPD_SERVER_HOSTNAME").unwrap(), Value::from("::"));
        assert_eq!(settings.remove("MPD_SERVER_HOSTNAME"), None);
    }

    // ------------------------------------------------------------------------
    // path expansion
    // ------------------------------------------------------------------------

    #[test]
    fn test_value_ending_in_path_is_expanded() {
        let mut settings = proxy();
        settings.set("TEST_PATH", "~/test");
        assert_eq!(settings.get("TEST_PATH").unwrap(), expanded_home("test"));
    }

    #[test]
    fn test_value_ending_in_path_is_absolute() {
        let mut settings = proxy();
        settings.set("TEST_PATH", "./test");
        assert_eq!(settings.get("TEST_PATH").unwrap(), cwd_join("test"));
    }

    #[test]
    fn test_value_ending_in_file_is_expanded() {
        let mut settings = proxy();
        settings.set("TEST_FILE", "~/test");
        assert_eq!(settings.get("TEST_FILE").unwrap(), expanded_home("test"));
    }

    #[test]
    fn test_value_ending_in_file_is_absolute() {
        let mut settings = proxy();
        settings.set("TEST_FILE", "./test");
        assert_eq!(settings.get("TEST_FILE").unwrap(), cwd_join("test"));
    }

    #[test]
    fn test_value_not_ending_in_path_or_file_is_not_expanded() {
        let mut settings = proxy();
        settings.set("TEST", "~/test");
        assert_eq!(settings.get("TEST").unwrap(), Value::from("~/test"));
    }

    #[test]
    fn test_value_not_ending_in_path_or_file_is_not_absolute() {
        let mut settings = proxy();
        settings.set("TEST", "./test");
        assert_eq!(settings.get("TEST").unwrap(), Value::from("./test"));
    }

    #[test]
    fn test_runtime_view_is_not_expanded() {
        let mut settings = proxy();
        settings.set("TEST_PATH", "~/test");
        assert_eq!(settings.runtime()["TEST_PATH"], Value::from("~/test"));
        assert_eq!(settings.current()["TEST_PATH"], expanded_home("test"));
    }

    #[test]
    fn test_default_paths_expanded_in_current() {
        let settings = proxy();
        let current = settings.current();
        assert_eq!(current["LOCAL_MUSIC_PATH"], expanded_home("music"));
        assert_eq!(current["LOCAL_MUSIC_PATH"], Value::String(expand_path("~/music")));
    }

    // ------------------------------------------------------------------------
    // layers
    // ------------------------------------------------------------------------

    #[test]
    fn test_local_layer_between_default_and_runtime() {
        let local = SettingsMap::from_iter([(
            "MPD_SERVER_HOSTNAME".to_string(),
            Value::from("0.0.0.0"),
        )]);
        let mut settings = SettingsProxy::with_local(defaults(), local);
        assert_eq!(settings.get("MPD_SERVER_HOSTNAME").unwrap(), Value::from("0.0.0.0"));
        assert_eq!(settings.source("MPD_SERVER_HOSTNAME"), Some(Layer::Local));

        settings.set("MPD_SERVER_HOSTNAME", "127.0.0.1");
        assert_eq!(settings.get("MPD_SERVER_HOSTNAME").unwrap(), Value::from("127.0.0.1"));

        settings.remove("MPD_SERVER_HOSTNAME");
        assert_eq!(settings.get("MPD_SERVER_HOSTNAME").unwrap(), Value::from("0.0.0.0"));
    }

    #[test]
    fn test_layered_names() {
        let local = SettingsMap::from_iter([("MPD_SERVER_PORT".to_string(), Value::from(1_i64))]);
        let mut settings = SettingsProxy::with_local(defaults(), local);
        settings.set("TEST", "test");
        let layers = settings.layered();
        assert_eq!(layers["MPD_SERVER_HOSTNAME"], Layer::Default);
        assert_eq!(layers["MPD_SERVER_PORT"], Layer::Local);
        assert_eq!(layers["TEST"], Layer::Runtime);
        assert_eq!(layers.len(), settings.current().len());
    }

    #[test]
    fn test_masked_current_hides_passwords() {
        let settings = proxy();
        let masked = settings.masked_current();
        assert_eq!(masked["SPOTIFY_PASSWORD"], Value::from(MASK));
        assert_eq!(masked["MPD_SERVER_PORT"], Value::Integer(6600));
        // the real value is still readable
        assert_eq!(settings.get_str("SPOTIFY_PASSWORD").unwrap(), "hunter2");
    }

    #[test]
    fn test_shared_defaults() {
        let shared = Arc::new(defaults());
        let a = SettingsProxy::new(Arc::clone(&shared));
        let mut b = SettingsProxy::new(Arc::clone(&shared));
        b.set("MPD_SERVER_PORT", 1_i64);
        assert_eq!(a.get("MPD_SERVER_PORT").unwrap(), Value::Integer(6600));
        assert_eq!(b.get("MPD_SERVER_PORT").unwrap(), Value::Integer(1));
    }

    // ------------------------------------------------------------------------
    // validation
    // ------------------------------------------------------------------------

    #[test]
    fn test_errors_checks_local_layer() {
        let local = SettingsMap::from_iter([
            ("SERVER_HOSTNAME".to_string(), Value::from("127.0.0.1")),
            ("MPD_SERVER_PORT".to_string(), Value::from(6601_i64)),
        ]);
        let settings = SettingsProxy::with_local(defaults(), local);
        let errors = settings.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("SERVER_HOSTNAME"),
            Some("Deprecated setting. Use MPD_SERVER_HOSTNAME.")
        );
        assert!(matches!(settings.validate(), Err(SettingsError::Validation(r)) if r.len() == 1));
    }

    #[test]
    fn test_runtime_writes_are_not_validated() {
        let mut settings = proxy();
        settings.set("FOO", "bar");
        assert!(settings.errors().is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_layer_labels() {
        assert_eq!(Layer::Runtime.to_string(), "runtime");
        assert!(Layer::Runtime > Layer::Local && Layer::Local > Layer::Default);
    }
}
