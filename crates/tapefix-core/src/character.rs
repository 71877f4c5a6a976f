// Character classification and simple case mapping

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library case mappings are iterators because some characters
// expand to several characters. Words are compared and re-cased one char at
// a time, so only the first character of a mapping is kept.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character so that word lengths never change.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
///
/// `'ß'` stays `'ß'` rather than expanding to `"SS"`.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    match (iter.next(), iter.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Check whether a character is a letter of any script.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Check whether a character separates words.
///
/// Covers the ASCII control separators (tab, newlines, form feed, file/group/
/// record/unit separators) plus every Unicode space character.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || (0x1C..=0x1F).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Compare two strings for equality, ignoring character case.
///
/// Comparison is per character with [`simple_lower`], so strings of
/// different character counts are never equal.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    let mut a = a.chars();
    let mut b = b.chars();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(ca), Some(cb)) if simple_lower(ca) == simple_lower(cb) => {}
            _ => return false,
        }
    }
}
