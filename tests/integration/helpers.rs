//! Shared helpers for integration tests.

use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;
use termcolorx::{ColorChoice, Printer, Prompter};

/// Printer writing into memory with a fixed color decision.
pub fn memory_printer(choice: ColorChoice) -> Printer<Vec<u8>> {
    Printer::new(Vec::new()).with_choice(choice)
}

/// Everything a memory printer has written so far.
pub fn printed(printer: Printer<Vec<u8>>) -> String {
    String::from_utf8(printer.into_inner()).expect("printer output is UTF-8")
}

/// Prompter fed from a fixed script of input lines.
pub fn scripted(input: &str, choice: ColorChoice) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).with_choice(choice)
}

/// Write `content` to a theme file inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_theme(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("theme.toml");
    std::fs::write(&path, content).expect("Failed to write theme file");
    (temp_dir, path)
}
