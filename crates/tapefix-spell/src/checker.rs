// Request handling: correct a phrase, compile the alignment machine, render it

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use sha2::{Digest, Sha256};
use tapefix_core::character::equals_ignore_case;
use tapefix_core::text::{join_words, split_words};
use tapefix_machine::{Graph, Topology, compile_with};
use tracing::{debug, info, warn};

use crate::corrector::Corrector;
use crate::render::{GraphvizRenderer, ImageFormat, RenderError, Renderer};

/// File name prefix of every rendered artifact.
pub const GRAPH_FILE_PREFIX: &str = "turing_machine_graph";

/// Hex digits of the content hash kept in artifact names.
const ARTIFACT_ID_LEN: usize = 16;

/// Where and how diagrams are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerOptions {
    /// Created on demand.
    pub output_dir: PathBuf,
    pub format: ImageFormat,
    pub topology: Topology,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("static"),
            format: ImageFormat::default(),
            topology: Topology::default(),
        }
    }
}

/// Result of one check request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResponse {
    pub message: String,
    pub graph_path: PathBuf,
    pub corrected: String,
    pub is_correct: bool,
}

/// Error type for check requests.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Corrects free text word by word and renders the alignment machine
/// between the input and its correction.
pub struct Checker<C, R = GraphvizRenderer> {
    corrector: C,
    renderer: R,
    options: CheckerOptions,
}

impl<C: Corrector, R: Renderer> Checker<C, R> {
    pub fn new(corrector: C, renderer: R, options: CheckerOptions) -> Self {
        Self {
            corrector,
            renderer,
            options,
        }
    }

    pub fn corrector(&self) -> &C {
        &self.corrector
    }

    pub fn options(&self) -> &CheckerOptions {
        &self.options
    }

    /// Correct each whitespace-delimited word and rejoin with single spaces.
    pub fn correct_phrase(&self, text: &str) -> String {
        correct_phrase(&self.corrector, text)
    }

    /// Correct `text` and compile its machine without rendering anything.
    pub fn assess(&self, text: &str) -> Assessment {
        assess(&self.corrector, text, self.options.topology)
    }

    /// Correct `text`, pick the status message and render the machine.
    ///
    /// A graph is rendered whether or not anything was misspelled.
    pub fn check(&self, text: &str) -> Result<CheckResponse, CheckError> {
        let Assessment {
            message,
            corrected,
            is_correct,
            graph,
        } = self.assess(text);

        let dir = &self.options.output_dir;
        std::fs::create_dir_all(dir).map_err(|source| CheckError::CreateOutputDir {
            path: dir.clone(),
            source,
        })?;
        let id = artifact_id(text, &corrected, self.options.topology);
        let stem = dir.join(format!("{GRAPH_FILE_PREFIX}_{id}"));
        let graph_path = self
            .renderer
            .render(&graph, &stem, self.options.format)
            .inspect_err(|err| warn!(error = %err, "rendering failed"))?;
        info!(
            path = %graph_path.display(),
            states = graph.states().len(),
            transitions = graph.transitions().len(),
            "graph rendered"
        );

        Ok(CheckResponse {
            message,
            graph_path,
            corrected,
            is_correct,
        })
    }
}

/// Outcome of correcting one text, before anything is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub message: String,
    pub corrected: String,
    /// The correction equals the input ignoring case.
    pub is_correct: bool,
    pub graph: Graph,
}

/// Correct each whitespace-delimited word and rejoin with single spaces.
///
/// Words the corrector has nothing for are kept as typed.
pub fn correct_phrase<C: Corrector + ?Sized>(corrector: &C, text: &str) -> String {
    let words: Vec<String> = split_words(text)
        .into_iter()
        .map(|word| match corrector.correct(word) {
            Some(fixed) => {
                if fixed != word {
                    debug!(word, corrected = %fixed, "word corrected");
                }
                fixed
            }
            None => word.to_string(),
        })
        .collect();
    join_words(&words)
}

/// Correct `text`, choose the status message and compile the machine
/// between the input and its correction.
///
/// The machine is compiled whatever the outcome. Text with no words
/// compiles as two empty strings.
pub fn assess<C: Corrector + ?Sized>(corrector: &C, text: &str, topology: Topology) -> Assessment {
    let corrected = correct_phrase(corrector, text);
    let is_correct = equals_ignore_case(text, &corrected);
    let message = status_message(text, &corrected, is_correct);
    let graph = if split_words(text).is_empty() {
        compile_with("", "", topology)
    } else {
        compile_with(text, &corrected, topology)
    };
    Assessment {
        message,
        corrected,
        is_correct,
        graph,
    }
}

/// Stable identifier for one rendered machine: the leading hex digits of
/// SHA-256 over `original`, `corrected` and the topology name, NUL-separated.
pub fn artifact_id(original: &str, corrected: &str, topology: Topology) -> String {
    let mut hasher = Sha256::new();
    hasher.update(original.as_bytes());
    hasher.update([0u8]);
    hasher.update(corrected.as_bytes());
    hasher.update([0u8]);
    hasher.update(topology.as_str().as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(ARTIFACT_ID_LEN);
    id
}

/// User-facing status line.
pub fn status_message(text: &str, corrected: &str, is_correct: bool) -> String {
    if is_correct {
        format!("The input '{text}' is spelled correctly.")
    } else {
        format!("The input '{text}' has misspelled words. Correcting to '{corrected}'.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_templates() {
        assert_eq!(
            status_message("cat", "cat", true),
            "The input 'cat' is spelled correctly."
        );
        assert_eq!(
            status_message("teh cat", "the cat", false),
            "The input 'teh cat' has misspelled words. Correcting to 'the cat'."
        );
    }

    #[test]
    fn artifact_id_is_stable_and_short() {
        let id = artifact_id("teh", "the", Topology::PerPosition);
        assert_eq!(id.len(), ARTIFACT_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id, artifact_id("teh", "the", Topology::PerPosition));
    }

    #[test]
    fn artifact_id_separates_the_pair() {
        let per = Topology::PerPosition;
        assert_ne!(artifact_id("ab", "c", per), artifact_id("a", "bc", per));
        assert_ne!(artifact_id("teh", "the", per), artifact_id("the", "teh", per));
    }

    #[test]
    fn artifact_id_depends_on_topology() {
        assert_ne!(
            artifact_id("teh", "the", Topology::PerPosition),
            artifact_id("teh", "the", Topology::Bucketed)
        );
    }

    #[test]
    fn assess_without_rendering() {
        let fix = |w: &str| (w == "teh").then(|| "the".to_string());
        let outcome = assess(&fix, "teh  dog", Topology::Bucketed);
        assert_eq!(outcome.corrected, "the dog");
        assert!(!outcome.is_correct);
        assert_eq!(outcome.graph, compile_with("teh  dog", "the dog", Topology::Bucketed));

        let outcome = assess(&fix, "\t\n", Topology::PerPosition);
        assert!(!outcome.is_correct);
        assert_eq!(outcome.graph, compile_with("", "", Topology::PerPosition));
    }

    #[test]
    fn default_options() {
        let options = CheckerOptions::default();
        assert_eq!(options.output_dir, PathBuf::from("static"));
        assert_eq!(options.format, ImageFormat::Png);
        assert_eq!(options.topology, Topology::PerPosition);
    }
}
