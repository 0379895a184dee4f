//! Graph-specific error types.

use mcf_core::{Cost, LocationHandle, McfError, NodeIndex};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors reported by the checked construction path and by validation.
///
/// The unchecked `add`/`link` path never produces these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A handle that was never returned by `add` on this graph.
    #[error("Location handle {handle} is unknown (graph has {num_locations} locations)")]
    UnknownLocation {
        handle: LocationHandle,
        num_locations: usize,
    },

    /// An edge endpoint lies outside `0..num_nodes`.
    #[error("Edge {edge} refers to node {node}, but the graph has {num_nodes} nodes")]
    DanglingEdge {
        edge: usize,
        node: NodeIndex,
        num_nodes: usize,
    },

    #[error("Edge {edge} leaves the sink node")]
    SinkOutflow { edge: usize },

    #[error("Edge {edge} enters the source node")]
    SourceInflow { edge: usize },

    #[error("Edge {edge} has non-finite cost {cost}")]
    NonFiniteCost { edge: usize, cost: Cost },

    #[error(transparent)]
    Core(#[from] McfError),
}

impl From<GraphError> for McfError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::Core(inner) => inner,
            other => McfError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
