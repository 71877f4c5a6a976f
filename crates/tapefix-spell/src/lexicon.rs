// Word-frequency lexicon backing the dictionary corrector

use std::path::Path;

use hashbrown::HashMap;
use tapefix_core::character::simple_lower;
use tracing::warn;

/// Built-in English word list, one `word count` pair per line.
const BUILTIN_WORDS: &str = include_str!("../data/en_words.txt");

/// Error type for lexicon loading.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid count on line {line}: {content:?}")]
    InvalidCount { line: usize, content: String },
}

/// Map from lowercase word to relative frequency.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<String, u64>,
    /// Length in characters of the longest word.
    longest: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded English lexicon.
    ///
    /// A parse failure is logged and yields an empty lexicon, which corrects
    /// nothing.
    pub fn builtin() -> Self {
        Self::from_embedded(BUILTIN_WORDS)
    }

    fn from_embedded(text: &str) -> Self {
        match Self::from_text(text) {
            Ok(lexicon) => lexicon,
            Err(err) => {
                warn!(error = %err, "embedded lexicon is malformed, starting empty");
                Self::new()
            }
        }
    }

    /// Parse lexicon text.
    ///
    /// Each line holds `word` or `word count`. Blank lines and lines starting
    /// with `#` are skipped. A word without a count gets frequency 1; repeated
    /// words add up.
    pub fn from_text(text: &str) -> Result<Self, LexiconError> {
        let mut lexicon = Self::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let count = match (fields.next(), fields.next()) {
                (None, _) => 1,
                (Some(c), None) => c.parse::<u64>().map_err(|_| LexiconError::InvalidCount {
                    line: index + 1,
                    content: raw.to_string(),
                })?,
                (Some(_), Some(_)) => {
                    return Err(LexiconError::InvalidCount {
                        line: index + 1,
                        content: raw.to_string(),
                    });
                }
            };
            lexicon.insert(word, count);
        }
        Ok(lexicon)
    }

    /// Load a lexicon file.
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_text(&text)
    }

    /// Add `count` occurrences of `word` (lowercased).
    pub fn insert(&mut self, word: &str, count: u64) {
        let key = lexicon_key(word);
        self.longest = self.longest.max(key.chars().count());
        let entry = self.words.entry(key).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Frequency of a lowercase word, `None` if unknown.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Whether `word` is known in any case, lowercased the way keys are.
    pub fn knows(&self, word: &str) -> bool {
        self.contains(&lexicon_key(word))
    }

    /// Length in characters of the longest word, 0 when empty.
    pub fn longest_word(&self) -> usize {
        self.longest
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every character used by some word, sorted.
    ///
    /// The edit generators draw replacement and insertion characters from
    /// this set, so a lexicon in another script gets matching edits.
    pub fn alphabet(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.words.keys().flat_map(|w| w.chars()).collect();
        chars.sort_unstable();
        chars.dedup();
        chars
    }
}

/// Per-character simple lowercase, so keys keep their length.
fn lexicon_key(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}
