//! Hit-key masking
//!
//! A hit key is a word with one occurrence of a fragment replaced by the
//! sentinel character. Two words that mask to the same key, one through the
//! search fragment and one through the replace fragment, differ by exactly
//! that substitution.
//!
//! Keys are compared as plain strings, so a sentinel that already appears in
//! an input word can collide with a masked position. That case is left as is.

/// Replace the first occurrence of `fragment` in `line` with `sentinel`
///
/// Returns `None` when `fragment` does not occur in `line`.
///
/// # Examples
/// ```
/// use sedwords::core::mask_first;
///
/// assert_eq!(mask_first("cement", "emen", '!').as_deref(), Some("c!t"));
/// assert_eq!(mask_first("cement", "a", '!'), None);
/// ```
#[must_use]
pub fn mask_first(line: &str, fragment: &str, sentinel: char) -> Option<String> {
    if fragment.is_empty() {
        return None;
    }

    let start = line.find(fragment)?;
    let end = start + fragment.len();

    let mut key = String::with_capacity(line.len() - fragment.len() + sentinel.len_utf8());
    key.push_str(&line[..start]);
    key.push(sentinel);
    key.push_str(&line[end..]);
    Some(key)
}

/// Rebuild a word from a hit key by putting `fragment` back at the sentinel
///
/// Only the first sentinel is replaced, mirroring [`mask_first`].
#[must_use]
pub fn unmask(key: &str, fragment: &str, sentinel: char) -> String {
    key.replacen(sentinel, fragment, 1)
}
