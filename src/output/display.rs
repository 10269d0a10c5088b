//! Display functions for scan results

use super::formatters::format_row;
use crate::finder::{ScanSummary, Transform};
use colored::Colorize;
use std::io::{self, BufWriter, Write};

/// Write one aligned row per transform
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_transforms<W: Write>(out: &mut W, transforms: &[Transform]) -> io::Result<()> {
    for transform in transforms {
        writeln!(out, "{}", format_row(transform))?;
    }
    out.flush()
}

/// Print every transform to stdout
///
/// # Errors
///
/// Returns an error if stdout cannot be written, e.g. a closed pipe.
pub fn print_transforms(transforms: &[Transform]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_transforms(&mut out, transforms)
}

/// Print scan statistics to stderr
pub fn print_summary(summary: &ScanSummary) {
    eprintln!("\n{}", "─".repeat(60).cyan());
    eprintln!(" {} ", "SCAN SUMMARY".bright_cyan().bold());
    eprintln!("{}", "─".repeat(60).cyan());
    eprintln!("   Lines read:   {}", summary.lines);
    eprintln!("   Candidates:   {}", summary.candidates);
    eprintln!("   Hit keys:     {}", summary.hit_keys);
    eprintln!(
        "   Transforms:   {}",
        format!("{}", summary.transforms).bright_yellow().bold()
    );
    eprintln!("   Time taken:   {:.3}s", summary.duration.as_secs_f64());
}
