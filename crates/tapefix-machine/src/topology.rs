// Policy choosing the state each aligned position enters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alignment::{Classification, SymbolPair};
use crate::graph::StateId;

/// Bucket entered by matching positions.
pub const COMPARE_STATE: &str = "q_compare";
/// Bucket entered by mismatching positions.
pub const CORRECT_STATE: &str = "q_correct";
/// Bucket entered by inserted positions.
pub const INSERT_STATE: &str = "q_insert";
/// Bucket entered by deleted positions.
pub const DELETE_STATE: &str = "q_delete";

/// How positions map to states.
///
/// Both policies see the same [`SymbolPair`] sequence, so labels,
/// classifications and edge order never depend on the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topology {
    /// A fresh state `q{i+1}` for position `i`. The chain is strictly linear.
    #[default]
    PerPosition,
    /// One shared state per classification. Positions of the same class
    /// re-enter the same state, so the diagram may contain self-loops and
    /// back edges.
    Bucketed,
}

impl Topology {
    /// State entered after reading `pair`.
    pub fn state_for(self, pair: &SymbolPair) -> StateId {
        match self {
            Topology::PerPosition => StateId::new(format!("q{}", pair.position + 1)),
            Topology::Bucketed => StateId::new(match pair.classification() {
                Classification::Match => COMPARE_STATE,
                Classification::Mismatch => CORRECT_STATE,
                Classification::Insert => INSERT_STATE,
                Classification::Delete => DELETE_STATE,
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Topology::PerPosition => "per-position",
            Topology::Bucketed => "bucketed",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown topology name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown topology '{0}' (expected 'per-position' or 'bucketed')")]
pub struct UnknownTopology(pub String);

impl FromStr for Topology {
    type Err = UnknownTopology;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-position" | "per_position" | "position" => Ok(Topology::PerPosition),
            "bucketed" | "buckets" => Ok(Topology::Bucketed),
            other => Err(UnknownTopology(other.to_string())),
        }
    }
}
