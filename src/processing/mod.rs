//! Handles the counting stage of `bytewc`.
//!
//! Each operation opens the file it is given, scans it once from start to end,
//! and releases the handle before returning. The byte count alone comes from
//! filesystem metadata instead of a scan.

use crate::core_types::{CountSelection, FileCounts};
use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

pub mod classify;
mod counter;

pub use counter::{calculate_counts, count_chars_in, count_newlines, ByteTally, WordScanner};

/// Size of the buffer used when reading files.
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Reads the file at `path` in chunks, passing each chunk to `visit`.
///
/// Failing to open or read the file yields `Error::FileInaccessible`.
fn scan_file<F>(path: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&[u8]),
{
    let mut file = File::open(path).map_err(|e| io_error_with_path(e, path))?;
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(io_error_with_path(e, path)),
        };
        visit(&buffer[..read]);
    }
    Ok(())
}

/// Counts lines: one plus the number of `\n` bytes.
///
/// An empty file has one line.
pub fn count_lines<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let mut newlines = 0;
    scan_file(path, |chunk| newlines += count_newlines(chunk))?;
    Ok(1 + newlines)
}

/// Counts maximal runs of graphic bytes.
pub fn count_words<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let mut scanner = WordScanner::new();
    scan_file(path, |chunk| scanner.update(chunk))?;
    Ok(scanner.finish())
}

/// Counts printable bytes plus bytes from the control-character set.
pub fn count_chars<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let mut chars = 0;
    scan_file(path, |chunk| chars += count_chars_in(chunk))?;
    Ok(chars)
}

/// Returns the size of the file from filesystem metadata.
///
/// Fails when the path does not exist, cannot be queried, or does not refer
/// to a regular file.
pub fn count_bytes<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| io_error_with_path(e, path))?;
    if !metadata.is_file() {
        return Err(io_error_with_path(
            io::Error::new(io::ErrorKind::Other, "not a regular file"),
            path,
        ));
    }
    Ok(metadata.len())
}

/// Counts lines, words, and characters in one pass, then queries the size.
///
/// The result equals calling the four single-purpose functions separately.
pub fn count_all<P: AsRef<Path>>(path: P) -> Result<FileCounts> {
    let path = path.as_ref();
    let mut tally = ByteTally::new();
    scan_file(path, |chunk| tally.update(chunk))?;
    let mut counts = tally.finish();
    counts.bytes = count_bytes(path)?;
    Ok(counts)
}

/// Computes the counts named by `selection` for the file at `path`.
///
/// An empty selection computes all four with [`count_all`]. Otherwise each
/// selected count is computed on its own and the rest stay zero.
pub fn count_file(path: &Path, selection: CountSelection) -> Result<FileCounts> {
    if selection.is_empty() {
        debug!("Counting all for '{}'", path.display());
        return count_all(path);
    }

    debug!("Counting {:?} for '{}'", selection, path.display());
    let mut counts = FileCounts::default();
    if selection.lines {
        counts.lines = count_lines(path)?;
    }
    if selection.words {
        counts.words = count_words(path)?;
    }
    if selection.chars {
        counts.chars = count_chars(path)?;
    }
    if selection.bytes {
        counts.bytes = count_bytes(path)?;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    fn write_fixture(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn independent(path: &Path) -> Result<FileCounts> {
        Ok(FileCounts {
            lines: count_lines(path)?,
            words: count_words(path)?,
            chars: count_chars(path)?,
            bytes: count_bytes(path)?,
        })
    }

    #[test]
    fn test_empty_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = write_fixture(&dir, "empty.txt", b"");

        assert_eq!(count_lines(&path)?, 1);
        assert_eq!(count_words(&path)?, 0);
        assert_eq!(count_chars(&path)?, 0);
        assert_eq!(count_bytes(&path)?, 0);
        assert_eq!(
            count_all(&path)?,
            FileCounts {
                lines: 1,
                words: 0,
                chars: 0,
                bytes: 0
            }
        );
        Ok(())
    }

    #[test]
    fn test_abc_def_scenario() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = write_fixture(&dir, "abc.txt", b"abc def\n");

        assert_eq!(
            count_all(&path)?,
            FileCounts {
                lines: 2,
                words: 2,
                chars: 8,
                bytes: 8
            }
        );
        Ok(())
    }

    #[test]
    fn test_count_all_matches_independent_counts() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let fixtures: [&[u8]; 6] = [
            b"",
            b"\n",
            b"no trailing newline",
            b"  lead and trail  \n\n",
            b"\x00\x01bin\xFF\xFEary\x00 data\n",
            b"tabs\tand\x0Bvtabs \"quoted\" 'single' what? back\\slash",
        ];
        for (i, content) in fixtures.iter().enumerate() {
            let path = write_fixture(&dir, &format!("f{i}"), content);
            assert_eq!(count_all(&path)?, independent(&path)?, "fixture {i}");
        }
        Ok(())
    }

    #[test]
    fn test_every_byte_value_once() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let content: Vec<u8> = (0..=u8::MAX).collect();
        let path = write_fixture(&dir, "bytes.bin", &content);

        assert_eq!(count_chars(&path)?, 98);
        assert_eq!(count_bytes(&path)?, 256);
        assert_eq!(count_lines(&path)?, 2);
        // 0x21..=0x7E is a single graphic run.
        assert_eq!(count_words(&path)?, 1);
        Ok(())
    }

    #[test]
    fn test_scan_continues_past_nul_bytes() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = write_fixture(&dir, "nul.bin", b"one\x00two\nthree\x00");

        assert_eq!(count_lines(&path)?, 2);
        assert_eq!(count_words(&path)?, 3);
        assert_eq!(count_chars(&path)?, 12);
        assert_eq!(count_bytes(&path)?, 14);
        Ok(())
    }

    #[test]
    fn test_large_file_crosses_buffer_boundaries() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let content = b"word ".repeat(READ_BUFFER_SIZE / 2 + 7);
        let path = write_fixture(&dir, "large.txt", &content);

        let counts = count_all(&path)?;
        assert_eq!(counts.words, (READ_BUFFER_SIZE / 2 + 7) as u64);
        assert_eq!(counts.bytes, content.len() as u64);
        assert_eq!(counts, independent(&path)?);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_inaccessible() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        for result in [
            count_lines(&path),
            count_words(&path),
            count_chars(&path),
            count_bytes(&path),
        ] {
            match result {
                Err(Error::FileInaccessible { path: p, .. }) => assert_eq!(p, path),
                other => panic!("Expected FileInaccessible, got {:?}", other),
            }
        }
        assert!(matches!(
            count_all(&path),
            Err(Error::FileInaccessible { .. })
        ));
    }

    #[test]
    fn test_directory_size_query_fails() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            count_bytes(dir.path()),
            Err(Error::FileInaccessible { .. })
        ));
    }

    #[test]
    fn test_directory_scan_fails_instead_of_reading_empty() {
        // Opening a directory may succeed; the failed read must still surface.
        let dir = tempdir().unwrap();
        for result in [
            count_lines(dir.path()),
            count_words(dir.path()),
            count_chars(dir.path()),
        ] {
            assert!(matches!(result, Err(Error::FileInaccessible { .. })));
        }
        assert!(matches!(
            count_all(dir.path()),
            Err(Error::FileInaccessible { .. })
        ));
    }

    #[test]
    fn test_count_file_respects_selection() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = write_fixture(&dir, "xy.txt", b"x y\n");

        let selection = CountSelection {
            lines: true,
            words: true,
            ..Default::default()
        };
        let counts = count_file(&path, selection)?;
        assert_eq!(counts.lines, 2);
        assert_eq!(counts.words, 2);
        assert_eq!(counts.chars, 0);
        assert_eq!(counts.bytes, 0);

        assert_eq!(
            count_file(&path, CountSelection::default())?,
            count_file(&path, CountSelection::ALL)?
        );
        Ok(())
    }
}
