//! Defines core data structures shared by counting, configuration, and output.
//!
//! `FileCounts` carries the four numbers reported for a file and
//! `CountSelection` records which of them were asked for.

/// Holds line, word, character, and byte counts for a single file.
///
/// Each field is computed independently. When only some counts were requested
/// the others are left at zero and are not reported.
///
/// # Examples
///
/// ```
/// use bytewc::core_types::FileCounts;
///
/// let counts: FileCounts = Default::default();
/// assert_eq!(counts.lines, 0);
/// assert_eq!(counts.words, 0);
/// assert_eq!(counts.chars, 0);
/// assert_eq!(counts.bytes, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileCounts {
    /// One plus the number of `\n` bytes.
    pub lines: u64,
    /// The number of maximal runs of graphic bytes.
    pub words: u64,
    /// The number of printable bytes plus bytes from the control-character set.
    pub chars: u64,
    /// The file size from filesystem metadata.
    pub bytes: u64,
}

/// Which counts to compute and report.
///
/// An empty selection (no flag given) means every count is reported.
///
/// # Examples
///
/// ```
/// use bytewc::core_types::CountSelection;
///
/// let none = CountSelection::default();
/// assert!(none.is_empty());
/// assert!(none.resolved().lines && none.resolved().bytes);
///
/// let some = CountSelection { words: true, ..Default::default() };
/// assert!(!some.is_empty());
/// assert!(!some.resolved().lines);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSelection {
    /// `-l` / `--lines`
    pub lines: bool,
    /// `-w` / `--words`
    pub words: bool,
    /// `-m` / `--chars`
    pub chars: bool,
    /// `-c` / `--bytes`
    pub bytes: bool,
}

impl CountSelection {
    /// A selection with every count enabled.
    pub const ALL: CountSelection = CountSelection {
        lines: true,
        words: true,
        chars: true,
        bytes: true,
    };

    /// Returns `true` when no count was explicitly selected.
    pub fn is_empty(&self) -> bool {
        !(self.lines || self.words || self.chars || self.bytes)
    }

    /// Returns the effective selection: `ALL` when empty, otherwise `self`.
    pub fn resolved(self) -> CountSelection {
        if self.is_empty() {
            Self::ALL
        } else {
            self
        }
    }
}
