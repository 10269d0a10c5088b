//! Sed-word finder
//!
//! Scans a word list for words that read as two-fragment sed substitutions
//! (`statement` is `s/a/emen/` with `t` as the delimiter) and for pairs of
//! other words in the list that such a pattern turns into one another.
//!
//! # Quick Start
//!
//! ```rust
//! use sedwords::finder::{ScanConfig, find_transforms};
//!
//! let words = ["bat", "cat", "cement", "statement"];
//! let result = find_transforms(&words, &ScanConfig::default());
//!
//! for transform in &result.transforms {
//!     println!("{transform}"); // statement: cat -> cement
//! }
//! ```

// Core domain types
pub mod core;

// Two-pass discovery
pub mod finder;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;
