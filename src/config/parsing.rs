// src/config/parsing.rs

use crate::core_types::CountSelection;
use log::trace;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Characters allowed after the leading `-` of a bundled short flag.
const BUNDLED_FLAG_CHARS: &str = "lwmc";

/// What a single command-line argument turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ArgKind {
    /// One or more count flags, merged into a selection.
    Flags(CountSelection),
    /// Anything that is not a flag, kept byte for byte.
    File(PathBuf),
}

/// Classifies one argument as count flags or a file path.
///
/// Exact long and short forms are recognized first. An argument starting with
/// `-` whose remaining characters all come from `lwmc` is a bundle with one
/// flag per character: `l` lines, `c` bytes, `w` words, and any other
/// character chars. A lone `-` is an empty bundle. Arguments that are not
/// valid UTF-8 can never be flags.
pub(super) fn classify_arg(arg: &OsStr) -> ArgKind {
    let Some(text) = arg.to_str() else {
        return ArgKind::File(PathBuf::from(arg));
    };
    let mut flags = CountSelection::default();
    match text {
        "-l" | "--lines" => flags.lines = true,
        "-c" | "--bytes" => flags.bytes = true,
        "-w" | "--words" => flags.words = true,
        "-m" | "--chars" => flags.chars = true,
        _ => match text.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| BUNDLED_FLAG_CHARS.contains(c)) => {
                for c in rest.chars() {
                    match c {
                        'l' => flags.lines = true,
                        'c' => flags.bytes = true,
                        'w' => flags.words = true,
                        _ => flags.chars = true,
                    }
                }
            }
            _ => return ArgKind::File(PathBuf::from(arg)),
        },
    }
    ArgKind::Flags(flags)
}

/// Splits raw arguments into the merged count selection and the file list.
///
/// File paths keep their order of appearance; flags may appear anywhere.
pub(super) fn split_args<I>(args: I) -> (CountSelection, Vec<PathBuf>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut selection = CountSelection::default();
    let mut files = Vec::new();
    for arg in args {
        let kind = classify_arg(&arg);
        trace!("Argument {:?} classified as {:?}", arg, kind);
        match kind {
            ArgKind::Flags(flags) => {
                selection.lines |= flags.lines;
                selection.words |= flags.words;
                selection.chars |= flags.chars;
                selection.bytes |= flags.bytes;
            }
            ArgKind::File(path) => files.push(path),
        }
    }
    (selection, files)
}
