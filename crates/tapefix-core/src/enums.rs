// Result types shared between the speller and its callers

/// Outcome of looking a single word up in a speller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpellResult {
    /// The word is known.
    Ok,
    /// The word is not known.
    Failed,
}

impl SpellResult {
    /// `true` for [`SpellResult::Ok`].
    pub fn is_ok(self) -> bool {
        self == SpellResult::Ok
    }
}

/// Hard cap, in characters, on words the suggestion generators will edit.
/// Longer tokens (URLs, pasted blobs) are passed through untouched.
pub const MAX_WORD_CHARS: usize = 255;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_result_ordering_puts_ok_first() {
        assert!(SpellResult::Ok < SpellResult::Failed);
    }

    #[test]
    fn is_ok() {
        assert!(SpellResult::Ok.is_ok());
        assert!(!SpellResult::Failed.is_ok());
    }
}
