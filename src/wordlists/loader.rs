//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from string slices.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Line endings (`\n` or `\r\n`) are stripped and empty lines are skipped.
/// Every other line is kept byte for byte, duplicates included: a word listed
/// twice counts twice when hit keys are tallied.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use sedwords::wordlists::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(collect_lines(content.lines()))
}

/// Convert a string slice to an owned word list
///
/// # Examples
/// ```
/// use sedwords::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["bat", "cat\r", ""]);
/// assert_eq!(words, vec!["bat", "cat"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    collect_lines(slice.iter().copied())
}

fn collect_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
