// Suggestion status tracking: abort conditions, cost budget, deduplication

use std::cmp::Reverse;

use hashbrown::HashSet;

/// A validated candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested word, lowercase.
    pub word: String,
    /// Number of edits between the misspelled word and this one.
    pub distance: u8,
    /// Lexicon frequency of the word.
    pub frequency: u64,
}

/// Tracks the state of one suggestion search: found suggestions, the cost
/// budget and the set of candidates already looked up.
///
/// Every speller lookup costs one unit via [`charge`](Self::charge). The
/// strategy sets `max_cost` to bound the work done for a single word.
pub struct SuggestionStatus<'a> {
    word: &'a [char],
    max_suggestions: usize,
    max_cost: usize,
    current_cost: usize,
    suggestions: Vec<Suggestion>,
    /// Candidates already looked up, so each costs at most once.
    seen: HashSet<Vec<char>>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(word: &'a [char], max_suggestions: usize) -> Self {
        Self {
            word,
            max_suggestions,
            max_cost: 0,
            current_cost: 0,
            suggestions: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Returns `true` if no more candidates should be looked up.
    ///
    /// Abort when the suggestion limit is reached, or when the cost budget
    /// is spent. While nothing has been found the budget counts double.
    pub fn should_abort(&self) -> bool {
        if self.suggestions.len() >= self.max_suggestions {
            return true;
        }
        if self.current_cost < self.max_cost {
            return false;
        }
        if self.suggestions.is_empty() && self.current_cost < 2 * self.max_cost {
            return false;
        }
        true
    }

    /// Record one lookup.
    pub fn charge(&mut self) {
        self.current_cost += 1;
    }

    pub fn set_max_cost(&mut self, max_cost: usize) {
        self.max_cost = max_cost;
    }

    pub fn current_cost(&self) -> usize {
        self.current_cost
    }

    /// Mark `candidate` as looked up. Returns `false` if it was seen before.
    pub fn mark_seen(&mut self, candidate: &[char]) -> bool {
        if self.seen.contains(candidate) {
            return false;
        }
        self.seen.insert(candidate.to_vec());
        true
    }

    /// Add a validated candidate. Duplicates and anything past the
    /// suggestion limit are ignored.
    pub fn add_suggestion(&mut self, word: String, distance: u8, frequency: u64) {
        if self.suggestions.len() >= self.max_suggestions {
            return;
        }
        if self.suggestions.iter().any(|s| s.word == word) {
            return;
        }
        self.suggestions.push(Suggestion {
            word,
            distance,
            frequency,
        });
    }

    /// Order by edit distance, then most frequent first, then alphabetically.
    pub fn sort_suggestions(&mut self) {
        self.suggestions.sort_by(|a, b| {
            (a.distance, Reverse(a.frequency), &a.word).cmp(&(
                b.distance,
                Reverse(b.frequency),
                &b.word,
            ))
        });
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    pub fn max_suggestion_count(&self) -> usize {
        self.max_suggestions
    }

    pub fn word(&self) -> &[char] {
        self.word
    }

    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.suggestions
    }
}
