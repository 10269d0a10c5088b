//! Word list input
//!
//! Reads newline-delimited word lists from disk.

pub mod loader;

pub use loader::{load_from_file, words_from_slice};
