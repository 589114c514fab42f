//! Path utilities.
//!
//! Pure functions for path manipulation. Nothing here touches the
//! filesystem beyond asking for the current working directory.
//!
//! - [`fs`]: tilde expansion and lexical absolute paths (`expand_tilde`, `absolute_path`)

pub mod fs;

pub use fs::{absolute_path, clean_path, expand_tilde};
