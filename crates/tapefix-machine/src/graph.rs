// States and the finished diagram

use std::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::OUTPUT_STATE;
use crate::alignment::Classification;
use crate::transition::Transition;

/// Opaque state identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for StateId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Node shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateShape {
    Circle,
    DoubleCircle,
    Box,
}

impl StateShape {
    /// Graphviz shape name.
    pub fn as_str(self) -> &'static str {
        match self {
            StateShape::Circle => "circle",
            StateShape::DoubleCircle => "doublecircle",
            StateShape::Box => "box",
        }
    }
}

/// Fill of a filled node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillColor {
    LightGrey,
}

impl FillColor {
    pub fn as_str(self) -> &'static str {
        match self {
            FillColor::LightGrey => "lightgrey",
        }
    }
}

/// A node of the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub shape: StateShape,
    /// Display label; `None` shows the identifier.
    pub label: Option<String>,
    /// `Some` draws the node filled with this color.
    pub fill: Option<FillColor>,
}

impl State {
    pub fn new(id: impl Into<String>, shape: StateShape) -> Self {
        Self {
            id: StateId::new(id),
            shape,
            label: None,
            fill: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_fill(mut self, fill: FillColor) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// The states and transitions of one compilation, in emission order.
///
/// A graph is only produced by the compiler and has no mutating methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    states: Vec<State>,
    transitions: Vec<Transition>,
}

impl Graph {
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Look a state up by identifier.
    pub fn state(&self, id: &str) -> Option<&State> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Transitions that stand for aligned positions, in position order.
    pub fn content_transitions(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(|t| t.is_content())
    }

    /// Classification of every aligned position, in position order.
    pub fn classifications(&self) -> Vec<Classification> {
        self.transitions
            .iter()
            .filter_map(Transition::classification)
            .collect()
    }

    /// Label of the output node.
    pub fn output_label(&self) -> Option<&str> {
        self.state(OUTPUT_STATE).and_then(|s| s.label.as_deref())
    }
}

/// Accumulates states and transitions while the compiler walks a pair.
///
/// States are recorded the first time they are named, so a bucket state
/// entered by several positions appears once.
#[derive(Debug, Default)]
pub(crate) struct GraphBuilder {
    states: Vec<State>,
    seen: HashSet<StateId>,
    transitions: Vec<Transition>,
}

impl GraphBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_state(&mut self, state: State) {
        if self.seen.insert(state.id.clone()) {
            self.states.push(state);
        }
    }

    pub(crate) fn add_transition(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    pub(crate) fn finish(self) -> Graph {
        Graph {
            states: self.states,
            transitions: self.transitions,
        }
    }
}
