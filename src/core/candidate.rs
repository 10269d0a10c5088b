//! Substitution-pattern candidates
//!
//! A candidate is a word shaped like `s/search/replace/`, where the character
//! after the marker is the delimiter. `statement` reads as `s t a t emen t`,
//! i.e. "replace `a` with `emen`".

use super::{PAIR_COUNT, mask_first};
use rustc_hash::FxHashMap;
use std::fmt;

/// Shortest word that can hold marker, delimiter, two fragments and two more delimiters
pub const MIN_CANDIDATE_LEN: usize = 5;

/// A word that reads as a substitution, with the hit counts gathered for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    search: String,
    replace: String,
    hit_counts: FxHashMap<String, u32>,
}

/// Reason a word is not a candidate
///
/// These are filter outcomes, not failures: most words in a list are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooShort(usize),
    WrongMarker,
    BadShape,
    SameFragments,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Word must be at least {MIN_CANDIDATE_LEN} characters, got {len}")
            }
            Self::WrongMarker => write!(f, "Word does not start with the marker"),
            Self::BadShape => write!(f, "Word is not shaped like a two-fragment substitution"),
            Self::SameFragments => write!(f, "Search and replace fragments are identical"),
        }
    }
}

impl std::error::Error for Rejection {}

impl Candidate {
    /// Parse a word as a substitution pattern led by `marker`
    ///
    /// # Errors
    /// Returns `Rejection` if:
    /// - The word is shorter than [`MIN_CANDIDATE_LEN`]
    /// - The word does not start with `marker`
    /// - The rest is not `D search D replace D` with non-empty fragments
    /// - The two fragments are equal
    ///
    /// # Examples
    /// ```
    /// use sedwords::core::Candidate;
    ///
    /// let candidate = Candidate::parse("statement", 's').unwrap();
    /// assert_eq!(candidate.search(), "a");
    /// assert_eq!(candidate.replace(), "emen");
    ///
    /// assert!(Candidate::parse("cat", 's').is_err());
    /// ```
    pub fn parse(word: &str, marker: char) -> Result<Self, Rejection> {
        let len = word.chars().count();
        if len < MIN_CANDIDATE_LEN {
            return Err(Rejection::TooShort(len));
        }

        let mut chars = word.chars();
        if chars.next() != Some(marker) {
            return Err(Rejection::WrongMarker);
        }

        // Length check guarantees a second character
        let Some(delim) = chars.next() else {
            return Err(Rejection::BadShape);
        };

        let body = chars
            .as_str()
            .strip_suffix(delim)
            .ok_or(Rejection::BadShape)?;

        let mut parts = body.split(delim);
        let (Some(search), Some(replace), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Rejection::BadShape);
        };

        if search.is_empty() || replace.is_empty() {
            return Err(Rejection::BadShape);
        }

        if search == replace {
            return Err(Rejection::SameFragments);
        }

        Ok(Self {
            search: search.to_string(),
            replace: replace.to_string(),
            hit_counts: FxHashMap::default(),
        })
    }

    /// Fragment the pattern replaces
    #[inline]
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Fragment the pattern substitutes in
    #[inline]
    #[must_use]
    pub fn replace(&self) -> &str {
        &self.replace
    }

    /// Hit counts gathered so far, keyed by masked word
    #[inline]
    #[must_use]
    pub const fn hit_counts(&self) -> &FxHashMap<String, u32> {
        &self.hit_counts
    }

    /// Count of a single hit key (0 if never seen)
    #[must_use]
    pub fn hit_count(&self, key: &str) -> u32 {
        self.hit_counts.get(key).copied().unwrap_or(0)
    }

    /// Mask `line` with both fragments and count each resulting key
    ///
    /// The two masks are independent, so one line adds at most two hits.
    pub fn record_line(&mut self, line: &str, sentinel: char) {
        if let Some(key) = mask_first(line, &self.search, sentinel) {
            *self.hit_counts.entry(key).or_insert(0) += 1;
        }
        if let Some(key) = mask_first(line, &self.replace, sentinel) {
            *self.hit_counts.entry(key).or_insert(0) += 1;
        }
    }

    /// Hit keys reached by exactly two lines, in lexicographic order
    #[must_use]
    pub fn paired_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .hit_counts
            .iter()
            .filter(|&(_, &count)| count == PAIR_COUNT)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_statement() {
        let candidate = Candidate::parse("statement", 's').unwrap();
        assert_eq!(candidate.search(), "a");
        assert_eq!(candidate.replace(), "emen");
        assert!(candidate.hit_counts().is_empty());
    }

    #[test]
    fn parse_slash_delimiter() {
        let candidate = Candidate::parse("s/ab/cd/", 's').unwrap();
        assert_eq!(candidate.search(), "ab");
        assert_eq!(candidate.replace(), "cd");
    }

    #[test]
    fn parse_too_short() {
        assert_eq!(Candidate::parse("sasb", 's'), Err(Rejection::TooShort(4)));
        assert_eq!(Candidate::parse("", 's'), Err(Rejection::TooShort(0)));
    }

    #[test]
    fn parse_wrong_marker() {
        assert_eq!(
            Candidate::parse("tatement", 's'),
            Err(Rejection::WrongMarker)
        );
        assert_eq!(
            Candidate::parse("Statement", 's'),
            Err(Rejection::WrongMarker)
        );
    }

    #[test]
    fn parse_missing_trailing_delimiter() {
        // s t a t emen t s: ends with 's', not the delimiter
        assert_eq!(
            Candidate::parse("statements", 's'),
            Err(Rejection::BadShape)
        );
    }

    #[test]
    fn parse_too_many_segments() {
        // s t a t e t e t: three fragments
        assert_eq!(Candidate::parse("statetet", 's'), Err(Rejection::BadShape));
    }

    #[test]
    fn parse_empty_fragment() {
        // s t t a t: empty search fragment
        assert_eq!(Candidate::parse("sttat", 's'), Err(Rejection::BadShape));
        // s t a t t: empty replace fragment
        assert_eq!(Candidate::parse("statt", 's'), Err(Rejection::BadShape));
    }

    #[test]
    fn parse_single_fragment() {
        assert_eq!(Candidate::parse("stabct", 's'), Err(Rejection::BadShape));
    }

    #[test]
    fn parse_same_fragments() {
        // s e x e x e: search == replace == "x"
        assert_eq!(
            Candidate::parse("sexexe", 's'),
            Err(Rejection::SameFragments)
        );
    }

    #[test]
    fn parse_custom_marker() {
        let candidate = Candidate::parse("y/ab/cd/", 'y').unwrap();
        assert_eq!(candidate.search(), "ab");
        assert_eq!(candidate.replace(), "cd");
        assert_eq!(
            Candidate::parse("s/ab/cd/", 'y'),
            Err(Rejection::WrongMarker)
        );
    }

    #[test]
    fn rejection_display() {
        assert_eq!(
            Rejection::TooShort(3).to_string(),
            "Word must be at least 5 characters, got 3"
        );
    }

    #[test]
    fn record_line_counts_both_masks() {
        let mut candidate = Candidate::parse("statement", 's').unwrap();
        candidate.record_line("statement", '!');
        assert_eq!(candidate.hit_count("st!tement"), 1);
        assert_eq!(candidate.hit_count("stat!t"), 1);
        assert_eq!(candidate.hit_counts().len(), 2);
    }

    #[test]
    fn record_line_without_match() {
        let mut candidate = Candidate::parse("statement", 's').unwrap();
        candidate.record_line("dog", '!');
        assert!(candidate.hit_counts().is_empty());
        assert_eq!(candidate.hit_count("dog"), 0);
    }

    #[test]
    fn record_line_same_key_from_both_fragments() {
        // s/ab/b/ on "ab": "ab" masks to "!", "b" masks to "a!"
        let mut candidate = Candidate::parse("s/ab/b/", 's').unwrap();
        candidate.record_line("ab", '!');
        assert_eq!(candidate.hit_count("!"), 1);
        assert_eq!(candidate.hit_count("a!"), 1);
    }

    #[test]
    fn paired_keys_exact_threshold() {
        let mut candidate = Candidate::parse("statement", 's').unwrap();
        for line in ["cat", "cement", "bat", "bit", "bement", "bemenq"] {
            candidate.record_line(line, '!');
        }
        // c!t: cat + cement, b!t: bat + bement, b!q: bemenq only
        assert_eq!(candidate.paired_keys(), vec!["b!t", "c!t"]);

        candidate.record_line("bat", '!');
        // b!t now has 3 and drops out
        assert_eq!(candidate.paired_keys(), vec!["c!t"]);
    }
}
