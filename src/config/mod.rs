//! Defines the `Config` struct consumed by [`crate::run`].
//!
//! A `Config` is built with [`ConfigBuilder`], either from the parsed CLI or
//! programmatically.

use crate::core_types::CountSelection;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;

/// Settings for a single run, in the shape the driver needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Which counts to print. Empty means all four.
    pub selection: CountSelection,
    /// File paths to count, in the order they were given, byte for byte.
    pub files: Vec<PathBuf>,
}

impl Config {
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self::default()
    }
}
