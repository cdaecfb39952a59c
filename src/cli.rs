// src/cli.rs

use clap::Parser;
use std::ffi::OsString;

/// Print line, word, character, and byte counts for each FILE.
///
/// With no flag, all four counts are printed as `<lines> <words> <chars> <bytes> <file>`.
/// With flags, only the selected counts are printed, always in the order
/// lines, words, chars, bytes.
///
/// Flags: -l/--lines, -w/--words, -m/--chars, -c/--bytes. Short flags may be
/// bundled (e.g. -lw). Any other argument, `--` included, is taken as a file path.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Count flags and file paths, in any order.
    #[arg(
        value_name = "ARG",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Builds a `Cli` from the full argument list, program name first.
    ///
    /// clap only sees the arguments when the first one is exactly `--help` or
    /// `--version`, and then prints the requested text and exits. Otherwise
    /// every argument is kept verbatim: clap would swallow a leading `--`,
    /// which must reach the classifier as a file path.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args
            .get(1)
            .is_some_and(|first| matches!(first.to_str(), Some("--help" | "--version")))
        {
            return Cli::parse_from(args);
        }
        let operands = if args.is_empty() {
            Vec::new()
        } else {
            args.split_off(1)
        };
        Cli { args: operands }
    }
}
