//! Hit-key aggregation
//!
//! Second pass over the word list. Every word is masked with each
//! candidate's search and replace fragments and the resulting hit keys are
//! counted on that candidate.

use super::CandidateSet;
use rayon::prelude::*;

/// Count hit keys for every candidate, one line at a time
pub fn aggregate<S: AsRef<str>>(words: &[S], candidates: &mut CandidateSet, sentinel: char) {
    for word in words {
        let word = word.as_ref();
        for candidate in candidates.values_mut() {
            candidate.record_line(word, sentinel);
        }
    }
}

/// Count hit keys for every candidate, one candidate per rayon task
///
/// Each candidate owns its counts, so partitioning by candidate needs no
/// merging. Produces the same counts as [`aggregate`].
pub fn aggregate_parallel<S: AsRef<str> + Sync>(
    words: &[S],
    candidates: &mut CandidateSet,
    sentinel: char,
) {
    candidates.par_iter_mut().for_each(|(_, candidate)| {
        for word in words {
            candidate.record_line(word.as_ref(), sentinel);
        }
    });
}
