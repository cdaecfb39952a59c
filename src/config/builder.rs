// src/config/builder.rs

use super::{parsing::split_args, Config};
use crate::cli::Cli;
use crate::core_types::CountSelection;
use anyhow::Result;
use log::debug;
use std::path::PathBuf;

/// A builder for creating a `Config` instance.
///
/// # Examples
///
/// ```
/// use bytewc::ConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = ConfigBuilder::new()
///     .lines(true)
///     .words(true)
///     .file("notes.txt")
///     .build()
///     .unwrap();
///
/// assert!(config.selection.lines);
/// assert!(!config.selection.bytes);
/// assert_eq!(config.files, [PathBuf::from("notes.txt")]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    selection: CountSelection,
    files: Vec<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with no flags and no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command-line arguments.
    ///
    /// Each raw argument is classified as count flags or a file path.
    pub fn from_cli(cli: Cli) -> Self {
        let (selection, files) = split_args(cli.args);
        Self { selection, files }
    }

    pub fn lines(mut self, enabled: bool) -> Self {
        self.selection.lines = enabled;
        self
    }

    pub fn words(mut self, enabled: bool) -> Self {
        self.selection.words = enabled;
        self
    }

    pub fn chars(mut self, enabled: bool) -> Self {
        self.selection.chars = enabled;
        self
    }

    pub fn bytes(mut self, enabled: bool) -> Self {
        self.selection.bytes = enabled;
        self
    }

    /// Replaces the whole count selection.
    pub fn selection(mut self, selection: CountSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Appends one file path.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Appends several file paths, keeping their order.
    pub fn files<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Builds the final `Config`.
    ///
    /// Paths are not checked here; an unreadable file is reported when it is
    /// reached during the run.
    pub fn build(self) -> Result<Config> {
        if self.files.is_empty() {
            debug!("No file paths given; nothing will be counted.");
        }
        debug!(
            "Selection {:?} for {} file(s)",
            self.selection,
            self.files.len()
        );
        Ok(Config {
            selection: self.selection,
            files: self.files,
        })
    }
}
