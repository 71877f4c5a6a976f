// Per-word correction: the `Corrector` capability and the dictionary policy

use std::fmt;

use tapefix_core::case::restore_case;
use tapefix_core::character::{is_letter, simple_lower};
use tapefix_core::enums::MAX_WORD_CHARS;
use tracing::trace;

use crate::lexicon::Lexicon;
use crate::speller::LexiconSpeller;
use crate::suggestion::strategy::edit_strategy;
use crate::suggestion::{StrategyOptions, Suggestion, SuggestionStatus, SuggestionStrategy};

/// Maps one word to its correction.
///
/// `None` means no correction is known; callers keep the original word.
pub trait Corrector {
    fn correct(&self, word: &str) -> Option<String>;
}

impl<F> Corrector for F
where
    F: Fn(&str) -> Option<String>,
{
    fn correct(&self, word: &str) -> Option<String> {
        self(word)
    }
}

/// Word-frequency corrector: the most frequent known word at the smallest
/// edit distance wins.
pub struct DictionaryCorrector {
    lexicon: Lexicon,
    strategy: SuggestionStrategy,
    options: StrategyOptions,
}

impl fmt::Debug for DictionaryCorrector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryCorrector")
            .field("words", &self.lexicon.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl DictionaryCorrector {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_options(lexicon, StrategyOptions::default())
    }

    pub fn with_options(lexicon: Lexicon, options: StrategyOptions) -> Self {
        let strategy = edit_strategy(&lexicon.alphabet(), &options);
        Self {
            lexicon,
            strategy,
            options,
        }
    }

    /// Corrector over the embedded English lexicon.
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Up to `max` ranked candidates for `word`, in the word's case pattern.
    ///
    /// A known word, or one too long to be a misspelled lexicon word, comes
    /// back as its only candidate.
    pub fn suggest(&self, word: &str, max: usize) -> Vec<String> {
        let original: Vec<char> = word.chars().collect();
        if !has_letters(&original) || max == 0 {
            return Vec::new();
        }
        if original.len() > self.edit_limit() {
            return vec![word.to_string()];
        }
        self.search(&original)
            .into_iter()
            .take(max)
            .map(|s| restore_case(&original, &s.word))
            .collect()
    }

    /// Longest token the generators will edit: three past the longest
    /// lexicon word, capped at `MAX_WORD_CHARS`.
    fn edit_limit(&self) -> usize {
        self.lexicon.longest_word().saturating_add(3).min(MAX_WORD_CHARS)
    }

    fn search(&self, original: &[char]) -> Vec<Suggestion> {
        let lower: Vec<char> = original.iter().map(|&c| simple_lower(c)).collect();
        let speller = LexiconSpeller::new(&self.lexicon);
        let mut status = SuggestionStatus::new(&lower, self.options.max_candidates);
        self.strategy.generate(&speller, &mut status);
        trace!(
            cost = status.current_cost(),
            found = status.suggestion_count(),
            "suggestion search finished"
        );
        status.sort_suggestions();
        status.into_suggestions()
    }
}

impl Corrector for DictionaryCorrector {
    fn correct(&self, word: &str) -> Option<String> {
        let original: Vec<char> = word.chars().collect();
        if !has_letters(&original) || original.len() > self.edit_limit() {
            return Some(word.to_string());
        }
        let best = self.search(&original).into_iter().next()?;
        Some(restore_case(&original, &best.word))
    }
}

fn has_letters(word: &[char]) -> bool {
    word.iter().any(|&c| is_letter(c))
}
