//! Path expansion for filesystem-referencing settings.
//!
//! Any setting whose name ends in `PATH` or `FILE` (case-sensitive) is
//! treated as a filesystem reference. String values of such settings get a
//! leading `~` expanded and are then made absolute against the current
//! working directory. Expansion happens on every read, so a relative value
//! follows the working directory of the moment.

use super::types::Value;
use crate::utils::path::{absolute_path, expand_tilde};
use std::path::Path;

/// Name suffixes marking filesystem-referencing settings.
pub const PATH_SUFFIXES: [&str; 2] = ["PATH", "FILE"];

/// Name suffix whose values are hidden in listings.
pub const SECRET_SUFFIX: &str = "PASSWORD";

/// Placeholder shown instead of secret values.
pub const MASK: &str = "********";

#[inline]
pub fn is_path_setting(name: &str) -> bool {
    PATH_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

#[inline]
pub fn is_secret_setting(name: &str) -> bool {
    name.ends_with(SECRET_SUFFIX)
}

/// Expand `~` and resolve to an absolute, lexically clean path.
///
/// If the working directory cannot be read, a relative value comes back
/// cleaned but still relative (see [`absolute_path`]).
pub fn expand_path(raw: &str) -> String {
    let expanded = expand_tilde(raw);
    absolute_path(Path::new(&expanded))
        .to_string_lossy()
        .into_owned()
}

/// Value of `name` as a reader sees it.
///
/// Only strings under a path-like name are rewritten; everything else is
/// returned verbatim, even if it looks like a path. Path values follow
/// [`expand_path`], including its relative fallback.
pub fn expand_setting(name: &str, value: &Value) -> Value {
    match value {
        Value::String(raw) if is_path_setting(name) => Value::String(expand_path(raw)),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_join(rest: &str) -> String {
        let home = shellexpand::tilde("~").into_owned();
        absolute_path(&Path::new(&home).join(rest))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_path_suffixes() {
        assert!(is_path_setting("LOCAL_MUSIC_PATH"));
        assert!(is_path_setting("LOCAL_TAG_CACHE_FILE"));
        assert!(is_path_setting("PATH"));
        assert!(!is_path_setting("LOCAL_MUSIC_PATH_"));
        assert!(!is_path_setting("local_music_path"));
        assert!(!is_path_setting("FILENAME"));
    }

    #[test]
    fn test_secret_suffix() {
        assert!(is_secret_setting("SPOTIFY_PASSWORD"));
        assert!(!is_secret_setting("SPOTIFY_USERNAME"));
    }

    #[test]
    fn test_expand_path_home() {
        let expanded = expand_path("~/test");
        assert!(Path::new(&expanded).is_absolute());
        assert_eq!(expanded, home_join("test"));
    }

    #[test]
    fn test_expand_path_relative() {
        let cwd = std::env::current_dir().unwrap();
        let expected = crate::utils::path::clean_path(&cwd.join("test"));
        assert_eq!(expand_path("./test"), expected.to_string_lossy());
    }

    #[test]
    fn test_expand_path_idempotent() {
        let once = expand_path("~/music/../test");
        assert_eq!(expand_path(&once), once);
        assert_eq!(expand_path("/var/lib/music"), "/var/lib/music");
    }

    #[test]
    fn test_expand_setting_leaves_other_values() {
        let value = Value::from("~/test");
        assert_eq!(expand_setting("TEST", &value), value);

        let number = Value::Integer(6600);
        assert_eq!(expand_setting("CACHE_FILE", &number), number);

        let list = Value::Array(vec![Value::from("./a")]);
        assert_eq!(expand_setting("PLAYLIST_PATH", &list), list);
    }
}
