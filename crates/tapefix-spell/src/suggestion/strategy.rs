// Suggestion strategy: run the generators at increasing edit distance

use hashbrown::HashSet;

use crate::speller::Speller;
use super::generators::*;
use super::status::SuggestionStatus;

/// Tuning knobs for a suggestion search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOptions {
    /// Lookup budget per word. Doubled while nothing has been found.
    pub max_cost: usize,
    /// Largest edit distance searched, 0 to 2.
    pub max_distance: u8,
    /// Most suggestions collected before ranking.
    pub max_candidates: usize,
}

impl Default for StrategyOptions {
    fn default() -> Self {
        Self {
            max_cost: 2000,
            max_distance: 2,
            max_candidates: 256,
        }
    }
}

/// Runs a list of generators and stops at the first edit distance that
/// yields anything.
///
/// Distance 0 is the word itself. Distance 1 applies every generator to the
/// word; distance 2 applies every generator to every distance-1 variant.
pub struct SuggestionStrategy {
    max_cost: usize,
    max_distance: u8,
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    pub fn new(options: &StrategyOptions, generators: Vec<Box<dyn SuggestionGenerator>>) -> Self {
        Self {
            max_cost: options.max_cost,
            max_distance: options.max_distance.min(2),
            generators,
        }
    }

    pub fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        status.set_max_cost(self.max_cost);
        let word = status.word().to_vec();

        let _ = suggest_for_buffer(speller, status, &word, 0);
        if status.suggestion_count() > 0 || self.max_distance == 0 {
            return;
        }

        let keep_variants = self.max_distance >= 2;
        let mut variants: Vec<Vec<char>> = Vec::new();
        let mut queued: HashSet<Vec<char>> = HashSet::new();
        for generator in &self.generators {
            let flow = generator.edits(&word, &mut |candidate: &[char]| {
                if keep_variants && !queued.contains(candidate) {
                    queued.insert(candidate.to_vec());
                    variants.push(candidate.to_vec());
                }
                suggest_for_buffer(speller, status, candidate, 1)
            });
            if flow.is_break() {
                break;
            }
        }
        if status.suggestion_count() > 0 || !keep_variants {
            return;
        }

        'outer: for variant in &variants {
            for generator in &self.generators {
                let flow = generator.edits(variant, &mut |candidate: &[char]| {
                    suggest_for_buffer(speller, status, candidate, 2)
                });
                if flow.is_break() {
                    break 'outer;
                }
            }
        }
    }

    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }
}

// =========================================================================
// Factory functions
// =========================================================================

/// Deletion, swap, replacement and insertion over `alphabet`.
pub fn edit_strategy(alphabet: &[char], options: &StrategyOptions) -> SuggestionStrategy {
    let generators: Vec<Box<dyn SuggestionGenerator>> = vec![
        Box::new(Deletion),
        Box::new(Swap),
        Box::new(Replacement { characters: alphabet.to_vec() }),
        Box::new(Insertion { characters: alphabet.to_vec() }),
    ];
    SuggestionStrategy::new(options, generators)
}

pub fn default_edit_strategy(alphabet: &[char]) -> SuggestionStrategy {
    edit_strategy(alphabet, &StrategyOptions::default())
}
