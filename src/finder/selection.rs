//! Pair selection and word reconstruction

use super::{CandidateSet, Transform};
use crate::core::unmask;

/// Collect one transform per hit key reached by exactly two lines
///
/// Candidates come out in key order, hit keys in lexicographic order within
/// each candidate. The sentinel in each key is swapped back for the search
/// fragment to get the source word and for the replace fragment to get the
/// target word.
#[must_use]
pub fn select_transforms(candidates: &CandidateSet, sentinel: char) -> Vec<Transform> {
    let mut transforms = Vec::new();

    for (pattern, candidate) in candidates {
        for key in candidate.paired_keys() {
            tracing::trace!(pattern = pattern.as_str(), key, "paired hit key");
            transforms.push(Transform {
                pattern: pattern.clone(),
                from: unmask(key, candidate.search(), sentinel),
                to: unmask(key, candidate.replace(), sentinel),
            });
        }
    }

    transforms
}
