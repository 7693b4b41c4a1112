//! Word list loading utilities
//!
//! Reads newline-delimited word files. Entries are passed through as text;
//! normalization happens when the dictionary index is built.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load words from a file
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use jumble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Load words from any buffered reader
///
/// # Errors
///
/// Returns an I/O error if reading a line fails (including invalid UTF-8).
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        words.push(trimmed.to_string());
    }
    Ok(words)
}
