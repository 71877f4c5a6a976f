// Labeled, colored edges between diagram states

use serde::{Deserialize, Serialize};

use crate::alignment::Classification;
use crate::graph::StateId;

/// Edge colors used by the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeColor {
    Black,
    Red,
    Blue,
    Green,
    Purple,
}

impl EdgeColor {
    /// Graphviz color name.
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeColor::Black => "black",
            EdgeColor::Red => "red",
            EdgeColor::Blue => "blue",
            EdgeColor::Green => "green",
            EdgeColor::Purple => "purple",
        }
    }
}

/// Line style of an edge. Solid edges carry no style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    Dashed,
}

impl EdgeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeStyle::Dashed => "dashed",
        }
    }
}

/// What an edge stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "classification", rename_all = "snake_case")]
pub enum TransitionKind {
    /// One aligned position.
    Content(Classification),
    /// Last content state (or the start state) into the accepting state.
    Accept,
    /// Accepting state into the output node.
    Output,
    /// Output node into the halting state.
    Halt,
}

/// A directed edge of the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub label: String,
    /// `None` leaves the renderer's default color.
    pub color: Option<EdgeColor>,
    pub style: Option<EdgeStyle>,
    pub kind: TransitionKind,
}

impl Transition {
    /// Classification of a content edge, `None` for scaffold edges.
    pub fn classification(&self) -> Option<Classification> {
        match self.kind {
            TransitionKind::Content(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self.kind, TransitionKind::Content(_))
    }

    pub fn is_dashed(&self) -> bool {
        self.style == Some(EdgeStyle::Dashed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_names() {
        assert_eq!(EdgeColor::Black.as_str(), "black");
        assert_eq!(EdgeColor::Purple.as_str(), "purple");
        assert_eq!(EdgeStyle::Dashed.as_str(), "dashed");
    }

    #[test]
    fn classification_only_on_content_edges() {
        let content = Transition {
            from: StateId::new("q0"),
            to: StateId::new("q1"),
            label: "a/a,R (match)".into(),
            color: Some(EdgeColor::Black),
            style: None,
            kind: TransitionKind::Content(Classification::Match),
        };
        assert_eq!(content.classification(), Some(Classification::Match));
        assert!(content.is_content());

        let halt = Transition {
            kind: TransitionKind::Halt,
            style: Some(EdgeStyle::Dashed),
            ..content
        };
        assert_eq!(halt.classification(), None);
        assert!(!halt.is_content());
        assert!(halt.is_dashed());
    }
}
