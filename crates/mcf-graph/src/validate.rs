//! Structural validation of the internal edge list.

use mcf_core::NodeIndex;
use rayon::prelude::*;
use tracing::debug;

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};

/// Check every edge against the node range and the source/sink roles.
///
/// Edges are scanned in parallel; the error reported is the one for the
/// lowest offending edge index, so results do not depend on scheduling.
pub(crate) fn validate_edges(edges: &[Edge], num_nodes: usize) -> GraphResult<()> {
    let first_error = edges
        .par_iter()
        .enumerate()
        .filter_map(|(i, edge)| check_edge(i, edge, num_nodes).err())
        .min_by_key(edge_of);

    match first_error {
        Some(err) => {
            debug!(%err, "graph validation failed");
            Err(err)
        }
        None => {
            debug!(edges = edges.len(), num_nodes, "graph validated");
            Ok(())
        }
    }
}

fn check_edge(i: usize, edge: &Edge, num_nodes: usize) -> GraphResult<()> {
    for node in [edge.source_index, edge.target_index] {
        if node.as_usize() >= num_nodes {
            return Err(GraphError::DanglingEdge {
                edge: i,
                node,
                num_nodes,
            });
        }
    }

    if edge.source_index == NodeIndex::SINK {
        return Err(GraphError::SinkOutflow { edge: i });
    }

    if edge.target_index == NodeIndex::SOURCE {
        return Err(GraphError::SourceInflow { edge: i });
    }

    if !edge.cost.is_finite() {
        return Err(GraphError::NonFiniteCost {
            edge: i,
            cost: edge.cost,
        });
    }

    Ok(())
}

fn edge_of(err: &GraphError) -> usize {
    match err {
        GraphError::DanglingEdge { edge, .. }
        | GraphError::SinkOutflow { edge }
        | GraphError::SourceInflow { edge }
        | GraphError::NonFiniteCost { edge, .. } => *edge,
        GraphError::UnknownLocation { .. } | GraphError::Core(_) => usize::MAX,
    }
}
