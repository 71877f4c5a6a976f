// Carrying a typed word's capitalization over to its correction

use crate::character::{is_letter, is_lower, is_upper, simple_upper};

/// How a typed word was capitalized, as far as corrections care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capitalization {
    /// Every letter uppercase: "HELO", "I".
    Shouted,
    /// Leading letter uppercase, the rest lowercase: "Teh".
    Leading,
    /// Lowercase, mixed, or no letters at all.
    Verbatim,
}

fn capitalization(word: &[char]) -> Capitalization {
    let mut letters = word.iter().copied().filter(|&c| is_letter(c));
    let Some(first) = letters.next() else {
        return Capitalization::Verbatim;
    };
    if !is_upper(first) {
        return Capitalization::Verbatim;
    }
    let (mut rest_upper, mut rest_lower) = (true, true);
    for c in letters {
        rest_upper &= !is_lower(c);
        rest_lower &= !is_upper(c);
    }
    if rest_upper {
        Capitalization::Shouted
    } else if rest_lower {
        Capitalization::Leading
    } else {
        Capitalization::Verbatim
    }
}

/// Re-apply the capitalization of `original` to a lowercase `replacement`.
///
/// Digits and punctuation are ignored on both sides. Mixed-case originals
/// such as "iPhone" leave the replacement untouched.
pub fn restore_case(original: &[char], replacement: &str) -> String {
    match capitalization(original) {
        Capitalization::Verbatim => replacement.to_string(),
        Capitalization::Shouted => replacement.chars().map(simple_upper).collect(),
        Capitalization::Leading => {
            let mut pending = true;
            replacement
                .chars()
                .map(|c| {
                    if pending && is_letter(c) {
                        pending = false;
                        simple_upper(c)
                    } else {
                        c
                    }
                })
                .collect()
        }
    }
}
