// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn bytewc_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bytewc"))
}

// Writes `content` to `name` inside `dir` and returns the file name.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> String {
    fs::write(dir.join(name), content).expect("fixture should be writable");
    name.to_string()
}
