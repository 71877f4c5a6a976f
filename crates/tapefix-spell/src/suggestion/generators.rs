// Individual suggestion generators: each enumerates one class of single-edit
// candidates for a word. Validation happens in `suggest_for_buffer`.

use std::ops::ControlFlow;

use crate::speller::Speller;
use super::status::SuggestionStatus;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Receives each candidate; `Break` stops the enumeration.
pub type Visitor<'v> = dyn FnMut(&[char]) -> ControlFlow<()> + 'v;

/// Trait for individual suggestion generators.
///
/// A generator applies one class of edit to `word` and hands every result
/// to `visit`. It never consults a speller itself, so the strategy can
/// reuse the same generators for candidates two edits away.
pub trait SuggestionGenerator {
    fn edits(&self, word: &[char], visit: &mut Visitor<'_>) -> ControlFlow<()>;

    /// Validate every single-edit candidate of the status word.
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        let _ = self.edits(&word, &mut |candidate: &[char]| {
            suggest_for_buffer(speller, status, candidate, 1)
        });
    }
}

// ---------------------------------------------------------------------------
// Shared helper
// ---------------------------------------------------------------------------

/// Look a candidate up and record it as a suggestion if the speller knows it.
///
/// Candidates already looked up cost nothing. Returns `Break` once the
/// status says to stop.
pub fn suggest_for_buffer(
    speller: &dyn Speller,
    status: &mut SuggestionStatus<'_>,
    buffer: &[char],
    distance: u8,
) -> ControlFlow<()> {
    if status.should_abort() {
        return ControlFlow::Break(());
    }
    if !status.mark_seen(buffer) {
        return ControlFlow::Continue(());
    }
    status.charge();
    if speller.spell(buffer).is_ok() {
        let frequency = speller.frequency(buffer);
        status.add_suggestion(buffer.iter().collect(), distance, frequency);
    }
    ControlFlow::Continue(())
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Delete one character at each position.
///
/// Positions repeating their predecessor are skipped; deleting either
/// letter of a double gives the same candidate.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn edits(&self, word: &[char], visit: &mut Visitor<'_>) -> ControlFlow<()> {
        if word.len() < 2 {
            return ControlFlow::Continue(());
        }
        let mut buffer = Vec::with_capacity(word.len() - 1);
        for i in 0..word.len() {
            if i > 0 && word[i] == word[i - 1] {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            visit(&buffer)?;
        }
        ControlFlow::Continue(())
    }
}

// ---------------------------------------------------------------------------
// Swap
// ---------------------------------------------------------------------------

/// Transpose each pair of adjacent characters.
pub struct Swap;

impl SuggestionGenerator for Swap {
    fn edits(&self, word: &[char], visit: &mut Visitor<'_>) -> ControlFlow<()> {
        let mut buffer = word.to_vec();
        for i in 1..word.len() {
            if word[i - 1] == word[i] {
                continue;
            }
            buffer.swap(i - 1, i);
            visit(&buffer)?;
            buffer.swap(i - 1, i);
        }
        ControlFlow::Continue(())
    }
}

// ---------------------------------------------------------------------------
// Replacement
// ---------------------------------------------------------------------------

/// Replace each character with every other character of an alphabet.
pub struct Replacement {
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Replacement {
    fn edits(&self, word: &[char], visit: &mut Visitor<'_>) -> ControlFlow<()> {
        let mut buffer = word.to_vec();
        for pos in 0..word.len() {
            for &to in &self.characters {
                if to == word[pos] {
                    continue;
                }
                buffer[pos] = to;
                visit(&buffer)?;
            }
            buffer[pos] = word[pos];
        }
        ControlFlow::Continue(())
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert every character of an alphabet at every position, ends included.
///
/// Inserting a character directly before an identical one is skipped: the
/// same candidate comes from inserting it after.
pub struct Insertion {
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Insertion {
    fn edits(&self, word: &[char], visit: &mut Visitor<'_>) -> ControlFlow<()> {
        if word.is_empty() {
            return ControlFlow::Continue(());
        }
        let mut buffer = Vec::with_capacity(word.len() + 1);
        for pos in 0..=word.len() {
            for &ins in &self.characters {
                if pos < word.len() && word[pos] == ins {
                    continue;
                }
                buffer.clear();
                buffer.extend_from_slice(&word[..pos]);
                buffer.push(ins);
                buffer.extend_from_slice(&word[pos..]);
                visit(&buffer)?;
            }
        }
        ControlFlow::Continue(())
    }
}

// =========================================================================
// Tests
// =========================================================================
