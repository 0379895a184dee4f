//! Directed, cost-bearing edge.

use mcf_core::{Cost, NodeIndex};

/// A directed edge in the internal node space.
///
/// Plain value type: no identity beyond its position in `Graph::edges()`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source_index: NodeIndex,
    pub target_index: NodeIndex,
    pub cost: Cost,
}

impl Edge {
    pub fn new(source_index: NodeIndex, target_index: NodeIndex, cost: Cost) -> Self {
        Self {
            source_index,
            target_index,
            cost,
        }
    }
}
