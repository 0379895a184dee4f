//! mcf-graph: flow graph construction for multiple object tracking.
//!
//! Provides:
//! - A handle-based API for adding locations and linking them
//! - Node doubling: every location becomes an entry/exit node pair joined by
//!   its observation edge
//! - A privileged solver capability for in-place cost updates
//! - Structural validation before handing the graph to a solver
//!
//! # Example
//!
//! ```
//! use mcf_graph::{Graph, LocationHandle};
//!
//! let mut graph = Graph::new();
//! let a = graph.add(-1.0);
//! let b = graph.add(-2.0);
//! graph.link(LocationHandle::ST, a, 0.5);
//! graph.link(a, b, 0.3);
//! graph.link(b, LocationHandle::ST, 0.5);
//!
//! assert_eq!(graph.num_nodes(), 6);
//! assert_eq!(graph.edges().len(), 5);
//! ```

pub mod edge;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod solver;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use indexing::{NodeRole, entry_node, exit_node, node_role};
pub use mcf_core::{Cost, LocationHandle, NodeIndex};
pub use solver::SolverAccess;
