//! End-to-end checks: built-in corrector, orchestration and rendering.
//!
//! Rendering uses the DOT format or a recording renderer so no Graphviz
//! installation is needed.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tapefix_machine::{Classification, Graph, Topology, compile};
use tapefix_spell::checker::artifact_id;
use tapefix_spell::render::artifact_path;
use tapefix_spell::{
    CheckError, Checker, CheckerOptions, Corrector, DictionaryCorrector, GraphvizRenderer,
    ImageFormat, RenderError, Renderer,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Records every render call instead of writing files.
#[derive(Default)]
struct RecordingRenderer {
    calls: RefCell<Vec<(Graph, PathBuf, ImageFormat)>>,
}

impl Renderer for &RecordingRenderer {
    fn render(
        &self,
        graph: &Graph,
        stem: &Path,
        format: ImageFormat,
    ) -> Result<PathBuf, RenderError> {
        self.calls
            .borrow_mut()
            .push((graph.clone(), stem.to_path_buf(), format));
        Ok(artifact_path(stem, format))
    }
}

fn options_in(dir: &Path) -> CheckerOptions {
    CheckerOptions {
        output_dir: dir.to_path_buf(),
        format: ImageFormat::Dot,
        topology: Topology::PerPosition,
    }
}

fn no_corrections(_: &str) -> Option<String> {
    None
}

// ---------------------------------------------------------------------------
// Built-in lexicon
// ---------------------------------------------------------------------------

#[test]
fn builtin_fixes_common_typos() {
    let corrector = DictionaryCorrector::builtin();
    let cases = [
        ("teh", "the"),
        ("speling", "spelling"),
        ("recieve", "receive"),
        ("wrold", "world"),
        ("becuase", "because"),
        ("definately", "definitely"),
    ];
    for (typo, expected) in cases {
        assert_eq!(corrector.correct(typo).as_deref(), Some(expected), "typo {typo}");
    }
}

#[test]
fn builtin_keeps_known_words_and_case() {
    let corrector = DictionaryCorrector::builtin();
    assert_eq!(corrector.correct("hello").as_deref(), Some("hello"));
    assert_eq!(corrector.correct("Teh").as_deref(), Some("The"));
    assert_eq!(corrector.correct("WROLD").as_deref(), Some("WORLD"));
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

#[test]
fn correct_input_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let checker = Checker::new(
        DictionaryCorrector::builtin(),
        GraphvizRenderer::default(),
        options_in(dir.path()),
    );
    let response = checker.check("hello world").unwrap();
    assert!(response.is_correct);
    assert_eq!(response.message, "The input 'hello world' is spelled correctly.");
    assert_eq!(response.corrected, "hello world");
    assert!(response.graph_path.exists());
    assert!(response.graph_path.starts_with(dir.path()));

    let dot = std::fs::read_to_string(&response.graph_path).unwrap();
    assert!(dot.contains("Corrected Word: hello world"));
    assert!(!dot.contains("(mismatch)"));
}

#[test]
fn misspelled_input_is_corrected_and_compiled() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = RecordingRenderer::default();
    let checker = Checker::new(DictionaryCorrector::builtin(), &renderer, options_in(dir.path()));

    let response = checker.check("teh cat").unwrap();
    assert!(!response.is_correct);
    assert_eq!(
        response.message,
        "The input 'teh cat' has misspelled words. Correcting to 'the cat'."
    );

    let calls = renderer.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (graph, stem, format) = &calls[0];
    assert_eq!(*graph, compile("teh cat", "the cat"));
    assert_eq!(*format, ImageFormat::Dot);
    let id = artifact_id("teh cat", "the cat", Topology::PerPosition);
    assert_eq!(*stem, dir.path().join(format!("turing_machine_graph_{id}")));
    assert_eq!(response.graph_path, artifact_path(stem, ImageFormat::Dot));
}

#[test]
fn unknown_words_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = RecordingRenderer::default();
    let checker = Checker::new(no_corrections, &renderer, options_in(dir.path()));
    let response = checker.check("qwxz  vbnm").unwrap();
    assert_eq!(response.corrected, "qwxz vbnm");
    // The doubled space makes the rejoined phrase differ from the input.
    assert!(!response.is_correct);
    assert_eq!(renderer.calls.borrow().len(), 1);
}

#[test]
fn case_only_difference_counts_as_correct() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = RecordingRenderer::default();
    let lower = |w: &str| Some(w.to_lowercase());
    let checker = Checker::new(lower, &renderer, options_in(dir.path()));
    let response = checker.check("Hello World").unwrap();
    assert!(response.is_correct);
    assert_eq!(response.corrected, "hello world");

    let calls = renderer.calls.borrow();
    let classes = calls[0].0.classifications();
    assert_eq!(
        classes.iter().filter(|c| **c == Classification::Mismatch).count(),
        2
    );
}

#[test]
fn whitespace_only_input_compiles_empty_pair() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = RecordingRenderer::default();
    let checker = Checker::new(DictionaryCorrector::builtin(), &renderer, options_in(dir.path()));
    let response = checker.check("   ").unwrap();
    assert_eq!(response.corrected, "");
    assert_eq!(response.message, "The input '   ' has misspelled words. Correcting to ''.");

    let calls = renderer.calls.borrow();
    assert_eq!(calls[0].0, compile("", ""));
    assert_eq!(calls[0].0.output_label(), Some("Corrected Word: "));
}

#[test]
fn empty_input_is_spelled_correctly() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = RecordingRenderer::default();
    let checker = Checker::new(DictionaryCorrector::builtin(), &renderer, options_in(dir.path()));
    let response = checker.check("").unwrap();
    assert!(response.is_correct);
    assert_eq!(response.message, "The input '' is spelled correctly.");
    assert_eq!(renderer.calls.borrow()[0].0.transitions().len(), 3);
}

#[test]
fn distinct_inputs_get_distinct_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let checker = Checker::new(
        DictionaryCorrector::builtin(),
        GraphvizRenderer::default(),
        options_in(dir.path()),
    );
    let first = checker.check("teh").unwrap();
    let second = checker.check("wrold").unwrap();
    let again = checker.check("teh").unwrap();
    assert_ne!(first.graph_path, second.graph_path);
    assert_eq!(first.graph_path, again.graph_path);
    assert!(first.graph_path.exists() && second.graph_path.exists());
}

#[test]
fn topologies_render_to_separate_files() {
    let dir = tempfile::tempdir().unwrap();
    let per_position = Checker::new(
        DictionaryCorrector::builtin(),
        GraphvizRenderer::default(),
        options_in(dir.path()),
    );
    let mut options = options_in(dir.path());
    options.topology = Topology::Bucketed;
    let bucketed = Checker::new(
        DictionaryCorrector::builtin(),
        GraphvizRenderer::default(),
        options,
    );

    let first = per_position.check("teh").unwrap();
    let second = bucketed.check("teh").unwrap();
    assert_ne!(first.graph_path, second.graph_path);

    let dot = std::fs::read_to_string(&first.graph_path).unwrap();
    assert_eq!(dot, compile("teh", "the").to_dot("turing_machine"));
    assert!(!dot.contains("q_compare"));
}

#[test]
fn output_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let checker = Checker::new(
        no_corrections,
        GraphvizRenderer::default(),
        options_in(&nested),
    );
    let response = checker.check("cat").unwrap();
    assert!(nested.is_dir());
    assert_eq!(response.graph_path.parent(), Some(nested.as_path()));
}

#[test]
fn output_dir_blocked_by_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("static");
    std::fs::write(&blocker, "not a directory").unwrap();
    let checker = Checker::new(
        no_corrections,
        GraphvizRenderer::default(),
        options_in(&blocker),
    );
    let err = checker.check("cat").unwrap_err();
    assert!(matches!(err, CheckError::CreateOutputDir { .. }));
}

#[test]
fn render_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = options_in(dir.path());
    options.format = ImageFormat::Png;
    let checker = Checker::new(
        no_corrections,
        GraphvizRenderer::new("/nonexistent/tapefix-dot"),
        options,
    );
    let err = checker.check("cat").unwrap_err();
    assert!(matches!(err, CheckError::Render(RenderError::Spawn { .. })));
}

#[test]
fn bucketed_topology_is_forwarded() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = RecordingRenderer::default();
    let mut options = options_in(dir.path());
    options.topology = Topology::Bucketed;
    let checker = Checker::new(DictionaryCorrector::builtin(), &renderer, options);
    checker.check("teh").unwrap();
    let calls = renderer.calls.borrow();
    assert!(calls[0].0.state("q_compare").is_some());
    assert!(calls[0].0.state("q1").is_none());
}

#[test]
fn response_serializes_transport_fields() {
    let dir = tempfile::tempdir().unwrap();
    let checker = Checker::new(
        DictionaryCorrector::builtin(),
        GraphvizRenderer::default(),
        options_in(dir.path()),
    );
    let response = checker.check("teh").unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["message"], response.message);
    assert_eq!(
        json["graph_path"].as_str().map(PathBuf::from),
        Some(response.graph_path.clone())
    );
    assert_eq!(json["is_correct"], false);
}
