//! Utility modules shared by the settings core and the command line.

pub mod path;
mod plural;

pub use plural::{plural_count, plural_s};
