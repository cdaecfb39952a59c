//! `bytewc` is a library and command-line tool that reports line, word,
//! character, and byte counts for files.
//!
//! The counts are byte-oriented and locale-independent:
//!
//! - **Lines**: one plus the number of `\n` bytes, so an empty file has one line.
//! - **Words**: maximal runs of graphic bytes (`0x21..=0x7E`).
//! - **Characters**: printable bytes (`0x20..=0x7E`) plus tab, line feed,
//!   vertical tab, `"`, `'`, `?` and `\`.
//! - **Bytes**: the file size from filesystem metadata.
//!
//! # Example: Library Usage
//!
//! ```
//! use bytewc::{run, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! let path = temp_dir.path().join("abc.txt");
//! fs::write(&path, "abc def\n").unwrap();
//! let path = path.to_str().unwrap();
//!
//! let config = ConfigBuilder::new().file(path).build().unwrap();
//!
//! let mut output = Vec::new();
//! run(&config, &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), format!("2 2 8 8 {}\n", path));
//! ```

pub mod cli;
pub mod config;
pub mod core_types;
pub mod errors;
pub mod output;
pub mod processing;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::{CountSelection, FileCounts};
pub use errors::{Error, Result};
pub use processing::{count_all, count_bytes, count_chars, count_file, count_lines, count_words};

use log::debug;
use std::io::Write;

/// Counts every file in `config` and writes one report line per file.
///
/// Files are handled strictly in order, and each line is written before the
/// next file is opened. The first file that cannot be counted stops the run:
/// nothing is written for it or for any later file, and its error is
/// returned.
///
/// # Errors
/// Returns `Error::FileInaccessible` for the first unreadable file, or
/// `Error::Output` if writing to `writer` fails.
pub fn run(config: &Config, writer: &mut dyn Write) -> Result<()> {
    for path in &config.files {
        let counts = count_file(path, config.selection)?;
        debug!("Counted '{}': {:?}", path.display(), counts);
        output::write_report(writer, &counts, config, path)?;
    }
    Ok(())
}
