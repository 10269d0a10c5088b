//! Terminal output formatting
//!
//! Result rows go to stdout, the optional summary to stderr.

pub mod display;
pub mod formatters;

pub use display::{print_summary, print_transforms, write_transforms};
