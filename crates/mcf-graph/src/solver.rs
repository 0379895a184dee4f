//! Privileged access for min-cost flow solvers.
//!
//! Construction code only needs [`Graph::add`] and [`Graph::link`]. A solver
//! that refines costs between passes, or inserts auxiliary nodes, asks for a
//! [`SolverAccess`] instead. Edges are exposed as a slice: costs and endpoints
//! may be rewritten, but edges cannot be inserted, removed or reordered.

use mcf_core::NodeIndex;
use tracing::debug;

use crate::edge::Edge;
use crate::graph::Graph;

/// Mutable view of a graph's internal node/edge structure.
#[derive(Debug)]
pub struct SolverAccess<'g> {
    graph: &'g mut Graph,
}

impl<'g> SolverAccess<'g> {
    pub(crate) fn new(graph: &'g mut Graph) -> Self {
        Self { graph }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.graph.edges
    }

    /// Same storage as [`Graph::edges`]; writes are visible there.
    pub fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.graph.edges
    }

    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    /// Overwrite the number of internal nodes, source and sink included.
    ///
    /// Only for solvers that restructured the node space themselves. Nothing
    /// is checked; run [`Graph::validate`] afterwards if in doubt.
    pub fn overwrite_num_nodes(&mut self, num_nodes: u32) {
        debug!(
            from = self.graph.num_nodes,
            to = num_nodes,
            "overwriting node count"
        );
        self.graph.num_nodes = num_nodes;
    }

    /// First node index past the current node range.
    pub fn next_free_node(&self) -> NodeIndex {
        NodeIndex::from_index(self.graph.num_nodes)
    }
}
