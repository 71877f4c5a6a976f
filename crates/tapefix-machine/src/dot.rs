// Graphviz DOT serialization of a compiled graph

use std::fmt::Write;

use crate::graph::{Graph, State};
use crate::transition::Transition;

/// Writes a [`Graph`] as a Graphviz `digraph`.
///
/// States are declared first and transitions follow, both in emission
/// order, so the rendered layout is stable for a given input pair.
#[derive(Debug, Clone)]
pub struct DotWriter {
    name: String,
    rankdir: Option<&'static str>,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            name: "turing_machine".to_string(),
            rankdir: None,
        }
    }
}

impl DotWriter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Lay the chain out left to right instead of top to bottom.
    pub fn left_to_right(mut self) -> Self {
        self.rankdir = Some("LR");
        self
    }

    pub fn write(&self, graph: &Graph) -> String {
        let mut dot = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(dot, "digraph \"{}\" {{", escape(&self.name));
        if let Some(rankdir) = self.rankdir {
            let _ = writeln!(dot, "  rankdir={rankdir};");
        }
        for state in graph.states() {
            write_state(&mut dot, state);
        }
        for transition in graph.transitions() {
            write_transition(&mut dot, transition);
        }
        dot.push_str("}\n");
        dot
    }
}

impl Graph {
    /// Serialize with a default [`DotWriter`] named `name`.
    pub fn to_dot(&self, name: &str) -> String {
        DotWriter::new(name).write(self)
    }
}

fn write_state(dot: &mut String, state: &State) {
    let mut attrs = vec![format!("shape={}", state.shape.as_str())];
    if let Some(label) = &state.label {
        attrs.push(format!("label=\"{}\"", escape(label)));
    }
    if let Some(fill) = state.fill {
        attrs.push("style=filled".to_string());
        attrs.push(format!("color={}", fill.as_str()));
    }
    let _ = writeln!(
        dot,
        "  \"{}\" [{}];",
        escape(state.id.as_str()),
        attrs.join(", ")
    );
}

fn write_transition(dot: &mut String, t: &Transition) {
    let mut attrs = vec![format!("label=\"{}\"", escape(&t.label))];
    if let Some(color) = t.color {
        attrs.push(format!("color={}", color.as_str()));
    }
    if let Some(style) = t.style {
        attrs.push(format!("style={}", style.as_str()));
    }
    let _ = writeln!(
        dot,
        "  \"{}\" -> \"{}\" [{}];",
        escape(t.from.as_str()),
        escape(t.to.as_str()),
        attrs.join(", ")
    );
}

/// Escape text for use inside a double-quoted DOT string.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}
