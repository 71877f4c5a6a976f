// Tape symbols and head movement

use std::fmt;

use serde::{Deserialize, Serialize};

/// Glyph used for the blank symbol in transition labels.
pub const BLANK_GLYPH: char = 'B';

/// A symbol read from or written to the tape.
///
/// `Blank` stands in for a position past the end of one of the strings.
/// It displays as `B`, the same glyph as a literal uppercase `B`; the
/// classification on the transition tells the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Char(char),
    Blank,
}

impl Symbol {
    /// Symbol at `index` of `chars`, or `Blank` past the end.
    pub fn at(chars: &[char], index: usize) -> Self {
        chars.get(index).copied().map_or(Symbol::Blank, Symbol::Char)
    }

    pub fn is_blank(self) -> bool {
        self == Symbol::Blank
    }

    /// The character carried by this symbol, if any.
    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(c),
            Symbol::Blank => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Blank => write!(f, "{BLANK_GLYPH}"),
        }
    }
}

/// Head movement after a transition. Every transition of the diagram moves
/// right; there is no tape simulation behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Move {
    #[default]
    Right,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Right => write!(f, "R"),
        }
    }
}
