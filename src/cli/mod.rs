//! Command-line interface module.

mod args;
pub mod check;
pub mod get;
pub mod list;
pub mod load;

pub use args::{Cli, Commands};
