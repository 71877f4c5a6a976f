// Spell checking against a word-frequency lexicon

use std::cell::RefCell;

use tapefix_core::enums::SpellResult;

use crate::lexicon::Lexicon;

/// Trait for spell checkers.
///
/// Words are passed as `char` slices so that generators can edit character
/// positions directly. Callers lowercase the word before asking.
pub trait Speller {
    /// Check whether `word` is known.
    fn spell(&self, word: &[char]) -> SpellResult;

    /// Relative frequency of `word`, 0 when unknown. Used to rank
    /// suggestions found at the same edit distance.
    fn frequency(&self, word: &[char]) -> u64;
}

/// [`Speller`] backed by a [`Lexicon`].
///
/// Holds a scratch buffer so each lookup does not allocate a fresh `String`.
pub struct LexiconSpeller<'a> {
    lexicon: &'a Lexicon,
    buffer: RefCell<String>,
}

impl<'a> LexiconSpeller<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            buffer: RefCell::new(String::new()),
        }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    fn lookup(&self, word: &[char]) -> Option<u64> {
        let mut buffer = self.buffer.borrow_mut();
        buffer.clear();
        buffer.extend(word.iter());
        self.lexicon.frequency(&buffer)
    }
}

impl Speller for LexiconSpeller<'_> {
    fn spell(&self, word: &[char]) -> SpellResult {
        if word.is_empty() {
            return SpellResult::Failed;
        }
        match self.lookup(word) {
            Some(_) => SpellResult::Ok,
            None => SpellResult::Failed,
        }
    }

    fn frequency(&self, word: &[char]) -> u64 {
        self.lookup(word).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn known_and_unknown_words() {
        let lexicon = Lexicon::from_text("cat 3\ndog\n").unwrap();
        let speller = LexiconSpeller::new(&lexicon);
        assert_eq!(speller.spell(&chars("cat")), SpellResult::Ok);
        assert_eq!(speller.spell(&chars("dog")), SpellResult::Ok);
        assert_eq!(speller.spell(&chars("cow")), SpellResult::Failed);
        assert_eq!(speller.spell(&[]), SpellResult::Failed);
    }

    #[test]
    fn frequency_of_unknown_is_zero() {
        let lexicon = Lexicon::from_text("cat 3\n").unwrap();
        let speller = LexiconSpeller::new(&lexicon);
        assert_eq!(speller.frequency(&chars("cat")), 3);
        assert_eq!(speller.frequency(&chars("cot")), 0);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let lexicon = Lexicon::from_text("cat\n").unwrap();
        let speller = LexiconSpeller::new(&lexicon);
        assert!(!speller.spell(&chars("Cat")).is_ok());
    }
}
