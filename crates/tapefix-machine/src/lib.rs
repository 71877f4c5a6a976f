//! Alignment-to-automaton compiler.
//!
//! Walks an (original, corrected) string pair position by position and emits
//! the diagram of a single-tape machine that "performs" the correction: one
//! classified transition per position, followed by a fixed accept, output
//! and halt scaffold. The result is a description for display, not an
//! executable automaton.
//!
//! # Architecture
//!
//! - [`symbols`] -- tape symbols, the blank sentinel and head movement
//! - [`alignment`] -- per-position classification into match, mismatch,
//!   insert and delete
//! - [`topology`] -- policy deciding which state each position enters
//! - [`transition`] -- labeled, colored edges
//! - [`graph`] -- states, the finished graph and its builder
//! - [`compiler`] -- the compile routine tying the above together
//! - [`dot`] -- Graphviz DOT serialization
//!
//! ```
//! use tapefix_machine::{Classification, compile};
//!
//! let graph = compile("cat", "cot");
//! assert_eq!(
//!     graph.classifications(),
//!     vec![Classification::Match, Classification::Mismatch, Classification::Match]
//! );
//! assert_eq!(graph.transitions().len(), 6);
//! ```

pub mod alignment;
pub mod compiler;
pub mod dot;
pub mod graph;
pub mod symbols;
pub mod topology;
pub mod transition;

pub use alignment::{Classification, SymbolPair, align, classify};
pub use compiler::{compile, compile_with};
pub use dot::DotWriter;
pub use graph::{FillColor, Graph, State, StateId, StateShape};
pub use symbols::{Move, Symbol};
pub use topology::Topology;
pub use transition::{EdgeColor, EdgeStyle, Transition, TransitionKind};

/// Identifier of the initial state.
pub const START_STATE: &str = "q0";
/// Identifier of the accepting state reached after the last position.
pub const ACCEPT_STATE: &str = "q_accept";
/// Identifier of the node carrying the corrected text.
pub const OUTPUT_STATE: &str = "corrected";
/// Identifier of the final halting state.
pub const HALT_STATE: &str = "q_halt";

/// Prefix of the output node's display label.
pub const OUTPUT_LABEL_PREFIX: &str = "Corrected Word: ";
/// Label of the edge into the accepting state.
pub const ACCEPT_LABEL: &str = "B/B,R (accept)";
/// Label of the edge from the accepting state to the output node.
pub const OUTPUT_EDGE_LABEL: &str = "Output Corrected Word";
/// Label of the edge from the output node to the halting state.
pub const HALT_LABEL: &str = "B/B,R (halt)";
