// Splitting free text into words and joining corrected words back

use crate::character::is_whitespace;

/// Split `text` into whitespace-delimited words.
///
/// Runs of whitespace collapse; leading and trailing whitespace produce no
/// empty words. Empty or whitespace-only text yields an empty list.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(is_whitespace).filter(|w| !w.is_empty()).collect()
}

/// Join words with single spaces.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();
    for (i, w) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(w.as_ref());
    }
    out
}
