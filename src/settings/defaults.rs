//! Application default settings.

use super::types::{SettingsMap, Value};

/// Immutable mapping from setting name to its built-in value.
///
/// Owned by the embedding application and handed to the proxy and the
/// validator at startup. Nothing in this crate mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    values: SettingsMap,
}

impl Defaults {
    pub fn new(values: SettingsMap) -> Self {
        Self { values }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether `name` is a current, recognized setting.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Setting names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Defaults
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<SettingsMap> for Defaults {
    fn from(values: SettingsMap) -> Self {
        Self::new(values)
    }
}

impl From<toml::Table> for Defaults {
    fn from(table: toml::Table) -> Self {
        table.into_iter().collect()
    }
}
