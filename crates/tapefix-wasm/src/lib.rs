// WASM bindings for tapefix.
//
// Provides a `WasmTapefix` class exported via wasm-bindgen that wraps a
// `DictionaryCorrector`. Graphs and check results are serialized to
// JavaScript values using serde-wasm-bindgen. Nothing is written to disk;
// `check` returns the DOT source for the caller to render.
//
// Usage from JavaScript:
//
//   const tf = new WasmTapefix();              // built-in English lexicon
//   const tf = new WasmTapefix("cat 10\n...");  // custom lexicon text
//   tf.correct("teh");                  // => "the"
//   tf.suggest("cet", 3);               // => ["cat", "cot", ...]
//   tf.compile("cat", "cot", false);    // => { states: [...], transitions: [...] }
//   tf.toDot("cat", "cot", true);       // => "digraph \"turing_machine\" { ... }"
//   tf.check("teh cat");                // => { message, corrected, isCorrect, dot }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use tapefix_machine::{Graph, Topology, compile_with};
use tapefix_spell::checker::assess;
use tapefix_spell::{Corrector, DictionaryCorrector, Lexicon};

/// Suggestions returned when the caller passes no limit.
const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Name of every emitted DOT digraph.
const GRAPH_NAME: &str = "turing_machine";

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable result of `check`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCheckResult {
    message: String,
    corrected: String,
    is_correct: bool,
    dot: String,
}

fn topology(bucketed: bool) -> Topology {
    if bucketed {
        Topology::Bucketed
    } else {
        Topology::PerPosition
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmTapefix
// ============================================================================

/// Spelling corrector and alignment-machine compiler for WebAssembly.
#[wasm_bindgen]
pub struct WasmTapefix {
    corrector: DictionaryCorrector,
}

#[wasm_bindgen]
impl WasmTapefix {
    /// Create an instance over `lexicon_text` (`word [count]` per line), or
    /// over the built-in English lexicon when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(lexicon_text: Option<String>) -> Result<WasmTapefix, JsError> {
        let corrector = match lexicon_text {
            Some(text) => {
                let lexicon =
                    Lexicon::from_text(&text).map_err(|e| JsError::new(&e.to_string()))?;
                DictionaryCorrector::new(lexicon)
            }
            None => DictionaryCorrector::builtin(),
        };
        Ok(WasmTapefix { corrector })
    }

    /// Number of words in the lexicon.
    #[wasm_bindgen(js_name = "wordCount")]
    pub fn word_count(&self) -> usize {
        self.corrector.lexicon().len()
    }

    /// Best correction for a single word; the word itself when none is known.
    pub fn correct(&self, word: &str) -> String {
        self.corrector
            .correct(word)
            .unwrap_or_else(|| word.to_string())
    }

    /// Ranked suggestions for a word, best first.
    pub fn suggest(&self, word: &str, max: Option<usize>) -> Vec<String> {
        self.corrector
            .suggest(word, max.unwrap_or(DEFAULT_MAX_SUGGESTIONS))
    }

    /// Compile the alignment machine between two strings.
    ///
    /// Returns a JavaScript object with `states` and `transitions` arrays.
    pub fn compile(
        &self,
        original: &str,
        corrected: &str,
        bucketed: bool,
    ) -> Result<JsValue, JsError> {
        let graph: Graph = compile_with(original, corrected, topology(bucketed));
        to_js(&graph)
    }

    /// Compile the alignment machine between two strings as DOT source.
    #[wasm_bindgen(js_name = "toDot")]
    pub fn to_dot(&self, original: &str, corrected: &str, bucketed: bool) -> String {
        compile_with(original, corrected, topology(bucketed)).to_dot(GRAPH_NAME)
    }

    /// Correct a phrase and compile its machine with the per-position
    /// topology.
    ///
    /// Returns a JavaScript object with fields `message`, `corrected`,
    /// `isCorrect` and `dot`.
    pub fn check(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.check_result(text))
    }

    /// Release resources held by this instance.
    pub fn terminate(self) {}
}

impl WasmTapefix {
    fn check_result(&self, text: &str) -> JsCheckResult {
        let outcome = assess(&self.corrector, text, Topology::default());
        JsCheckResult {
            dot: outcome.graph.to_dot(GRAPH_NAME),
            message: outcome.message,
            corrected: outcome.corrected,
            is_correct: outcome.is_correct,
        }
    }
}
