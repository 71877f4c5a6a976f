// Suggestion generation
//
// Produces correction candidates for a misspelled word by applying edit
// operations (deletion, swap, replacement, insertion) and validating the
// results through a speller.
//
//   - `generators`: one edit class per generator (SuggestionGenerator trait)
//   - `status`: abort conditions, cost budget, deduplication and ranking
//   - `strategy`: runs the generators at increasing edit distance

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::SuggestionGenerator;
pub use status::{Suggestion, SuggestionStatus};
pub use strategy::{StrategyOptions, SuggestionStrategy};
