// Position-by-position classification of an (original, corrected) pair

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::symbols::{Move, Symbol};
use crate::transition::EdgeColor;

/// How one position of the alignment relates the two strings.
///
/// The four cases are exhaustive: both characters present and equal, both
/// present and different, only the corrected character present, only the
/// original character present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Match,
    Mismatch,
    Insert,
    Delete,
}

impl Classification {
    /// Lowercase name used inside transition labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Match => "match",
            Classification::Mismatch => "mismatch",
            Classification::Insert => "insert",
            Classification::Delete => "delete",
        }
    }

    /// Display color of transitions with this classification.
    pub fn color(self) -> EdgeColor {
        match self {
            Classification::Match => EdgeColor::Black,
            Classification::Mismatch => EdgeColor::Red,
            Classification::Insert => EdgeColor::Blue,
            Classification::Delete => EdgeColor::Green,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two symbols found at one position of the alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolPair {
    /// Zero-based character position.
    pub position: usize,
    /// Symbol of the original string, `Blank` once it is exhausted.
    pub original: Symbol,
    /// Symbol of the corrected string, `Blank` once it is exhausted.
    pub corrected: Symbol,
}

impl SymbolPair {
    pub fn classification(&self) -> Classification {
        match (self.original, self.corrected) {
            (Symbol::Char(a), Symbol::Char(b)) if a == b => Classification::Match,
            (Symbol::Char(_), Symbol::Char(_)) => Classification::Mismatch,
            (Symbol::Blank, _) => Classification::Insert,
            (_, Symbol::Blank) => Classification::Delete,
        }
    }

    /// Transition label: `original/corrected,R (classification)`.
    pub fn label(&self) -> String {
        format!(
            "{}/{},{} ({})",
            self.original,
            self.corrected,
            Move::Right,
            self.classification()
        )
    }
}

/// Classify a single position.
///
/// Returns `None` once `position` is past the end of both strings, which
/// also guarantees a returned pair never has two blanks.
pub fn classify(position: usize, original: &[char], corrected: &[char]) -> Option<SymbolPair> {
    if position >= original.len().max(corrected.len()) {
        return None;
    }
    Some(SymbolPair {
        position,
        original: Symbol::at(original, position),
        corrected: Symbol::at(corrected, position),
    })
}

/// Align two strings position by position.
///
/// Produces exactly `max(len(original), len(corrected))` pairs, measured in
/// characters, in increasing position order.
pub fn align(original: &str, corrected: &str) -> Vec<SymbolPair> {
    let original: Vec<char> = original.chars().collect();
    let corrected: Vec<char> = corrected.chars().collect();
    (0..)
        .map_while(|i| classify(i, &original, &corrected))
        .collect()
}
