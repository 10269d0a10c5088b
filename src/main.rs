//! Sed-word finder - CLI
//!
//! Finds words in a word list that read as `s/search/replace/` commands and
//! the pairs of other words in the list they turn into one another.

use anyhow::{Context, Result, ensure};
use clap::{ArgAction, Parser};
use sedwords::{
    core::{MARKER, SENTINEL},
    finder::{ScanConfig, find_transforms},
    output::{print_summary, print_transforms},
    wordlists::load_from_file,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sedwords",
    about = "Find words that read as sed substitutions and the word pairs they transform",
    version,
    author
)]
struct Cli {
    /// Word list file, one word per line
    wordlist: PathBuf,

    /// Trace the scan on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Run the matching pass on all cores, one candidate per task
    #[arg(long)]
    parallel: bool,

    /// Print scan statistics to stderr after the results
    #[arg(long)]
    stats: bool,

    /// Leading letter that marks a substitution word
    #[arg(long, default_value_t = MARKER)]
    marker: char,

    /// Placeholder character used in hit keys
    #[arg(long, default_value_t = SENTINEL)]
    sentinel: char,
}

/// Install the stderr subscriber
///
/// `SEDWORDS_LOG` takes precedence over the verbosity flag when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("SEDWORDS_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word list, naming the path if it cannot be read
fn read_word_list(path: &Path) -> Result<Vec<String>> {
    load_from_file(path).with_context(|| format!("cannot read word list {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    ensure!(
        cli.marker != cli.sentinel,
        "marker and sentinel must differ (both are '{}')",
        cli.marker
    );

    let words = read_word_list(&cli.wordlist)?;
    tracing::debug!(path = %cli.wordlist.display(), lines = words.len(), "word list loaded");

    let config = ScanConfig {
        marker: cli.marker,
        sentinel: cli.sentinel,
        parallel: cli.parallel,
    };
    let result = find_transforms(&words, &config);

    print_transforms(&result.transforms).context("failed to write results")?;

    if cli.stats {
        print_summary(&result.summary);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_word_list_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = read_word_list(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("cannot read word list"));
        assert!(message.contains("nope.txt"));
    }

    #[test]
    fn reads_existing_word_list() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "statement").unwrap();

        let words = read_word_list(file.path()).unwrap();
        assert_eq!(words, vec!["statement"]);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["sedwords", "-vv", "--parallel", "--sentinel", "#", "words.txt"]);
        assert_eq!(cli.wordlist, PathBuf::from("words.txt"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.parallel);
        assert!(!cli.stats);
        assert_eq!(cli.marker, MARKER);
        assert_eq!(cli.sentinel, '#');
    }
}
