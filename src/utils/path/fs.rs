//! Path normalization utilities.
//!
//! Provides consistent path handling for path-like settings:
//! - `expand_tilde` - expand a leading `~` to the user's home directory
//! - `absolute_path` - resolve against the current directory (lexical, no symlinks)
//! - `clean_path` - fold `.` and `..` components without touching the filesystem

use crate::debug;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` or `~/` to the invoking user's home directory.
///
/// Input is returned unchanged if it has no leading tilde or no home
/// directory can be determined. `~user` forms are not expanded.
///
/// # Example
/// ```ignore
/// expand_tilde("~/music")  -> "/home/alice/music"
/// expand_tilde("./music")  -> "./music"
/// ```
#[inline]
pub fn expand_tilde(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}

/// Normalize a path to absolute form.
///
/// Relative paths are joined with the current working directory, then
/// cleaned lexically. Unlike `canonicalize()`, the path does not have to
/// exist and symlinks are preserved.
///
/// If the working directory cannot be read, the path is only cleaned and
/// stays relative; this is logged under `--verbose`.
///
/// # Example
/// ```ignore
/// // cwd = /srv/app
/// absolute_path(Path::new("./cache/../tags")) -> "/srv/app/tags"
/// absolute_path(Path::new("/var/lib/x/"))     -> "/var/lib/x"
/// ```
#[inline]
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return clean_path(path);
    }
    resolve_in(std::env::current_dir(), path)
}

fn resolve_in(cwd: io::Result<PathBuf>, path: &Path) -> PathBuf {
    match cwd {
        Ok(cwd) => clean_path(&cwd.join(path)),
        Err(e) => {
            debug!(
                "path"; "cannot read working directory ({}), `{}` stays relative",
                e, path.display()
            );
            clean_path(path)
        }
    }
}

/// Fold `.` and `..` components lexically.
///
/// `..` directly under the root stays at the root; leading `..` of a
/// relative path is kept. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
