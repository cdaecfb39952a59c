// src/output/formatter.rs

//! Formats the report line for one file.

use crate::core_types::{CountSelection, FileCounts};
use std::borrow::Cow;
use std::path::Path;

/// Returns the bytes of `path` exactly as they were given.
///
/// On Unix this is the raw byte string, so names that are not valid UTF-8 are
/// echoed unchanged. Elsewhere the path is converted lossily.
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Cow::Borrowed(path.as_os_str().as_bytes())
    }
    #[cfg(not(unix))]
    {
        match path.to_string_lossy() {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        }
    }
}

/// Formats the counts named by `selection`, then the file name.
///
/// Counts appear in the fixed order lines, words, chars, bytes, each followed
/// by a single space. An empty selection prints all four. The returned bytes
/// have no trailing newline.
///
/// # Examples
/// ```
/// use bytewc::core_types::{CountSelection, FileCounts};
/// use bytewc::output::formatter::format_report_line;
/// use std::path::Path;
///
/// let counts = FileCounts { lines: 2, words: 2, chars: 4, bytes: 4 };
/// let all = CountSelection::default();
/// let lines_only = CountSelection { lines: true, ..Default::default() };
/// let path = Path::new("xy.txt");
///
/// assert_eq!(format_report_line(&counts, all, path), b"2 2 4 4 xy.txt");
/// assert_eq!(format_report_line(&counts, lines_only, path), b"2 xy.txt");
/// ```
pub fn format_report_line(counts: &FileCounts, selection: CountSelection, path: &Path) -> Vec<u8> {
    let selection = selection.resolved();
    let mut line = String::new();
    for (enabled, value) in [
        (selection.lines, counts.lines),
        (selection.words, counts.words),
        (selection.chars, counts.chars),
        (selection.bytes, counts.bytes),
    ] {
        if enabled {
            line.push_str(&value.to_string());
            line.push(' ');
        }
    }
    let mut bytes = line.into_bytes();
    bytes.extend_from_slice(&path_bytes(path));
    bytes
}
