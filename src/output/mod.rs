// src/output/mod.rs

use crate::config::Config;
use crate::core_types::FileCounts;
use std::io::{self, Write};
use std::path::Path;

pub mod formatter;

use formatter::{format_report_line, path_bytes};

/// Writes the newline-terminated report line for one file.
///
/// The writer is flushed so each line is visible before the next file is
/// opened.
pub fn write_report(
    writer: &mut dyn Write,
    counts: &FileCounts,
    config: &Config,
    path: &Path,
) -> io::Result<()> {
    writer.write_all(&format_report_line(counts, config.selection, path))?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Writes the diagnostic for a file that could not be counted.
pub fn write_failure(writer: &mut dyn Write, path: &Path) -> io::Result<()> {
    writer.write_all(b"failed to open ")?;
    writer.write_all(&path_bytes(path))?;
    writer.write_all(b"\n")?;
    writer.flush()
}
