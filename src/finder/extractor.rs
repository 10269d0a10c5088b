//! Candidate extraction
//!
//! First pass over the word list: keep every word that parses as a
//! substitution pattern.

use super::CandidateSet;
use crate::core::Candidate;

/// Build the candidate set from a word list
///
/// Words that fail to parse are skipped. A word listed twice keeps the last
/// parse, which is identical to the first.
pub fn extract_candidates<S: AsRef<str>>(words: &[S], marker: char) -> CandidateSet {
    let mut candidates = CandidateSet::new();

    for word in words {
        let word = word.as_ref();
        match Candidate::parse(word, marker) {
            Ok(candidate) => {
                tracing::debug!(
                    word,
                    search = candidate.search(),
                    replace = candidate.replace(),
                    "candidate"
                );
                candidates.insert(word.to_string(), candidate);
            }
            Err(reason) => tracing::trace!(word, %reason, "rejected"),
        }
    }

    candidates
}
