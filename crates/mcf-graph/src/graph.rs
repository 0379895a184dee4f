//! The tracking flow graph.

use mcf_core::{Cost, LocationHandle, McfError, NodeIndex, ensure_finite};
use tracing::trace;

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::indexing::{NodeRole, entry_node, exit_node, node_role};
use crate::solver::SolverAccess;
use crate::validate;

/// Directed graph representation of a multiple object tracking problem.
///
/// Locations are space-time observations (detections, bounding boxes).
/// Each carries an observation cost, usually `-ln(b / (1 - b))` with `b` the
/// probability that the location is part of a trajectory. Transition edges
/// between plausible successor locations carry `-ln p(v | u)`.
/// See [`mcf_core::observation_cost`] and [`mcf_core::transition_cost`].
///
/// Public side: [`Graph::add`] returns handles `1, 2, 3, ...` and
/// [`Graph::link`] connects them, with [`LocationHandle::ST`] standing for
/// the source (as origin) and the sink (as target).
///
/// Internal side: every location owns an entry and an exit node joined by its
/// observation edge, so there are `2 + 2 * locations` nodes. Solvers read
/// [`Graph::edges`] and [`Graph::num_nodes`]; in-place rewrites go through
/// [`Graph::solver_access`].
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) edges: Vec<Edge>,
    pub(crate) num_nodes: u32,
    num_locations: usize,
    /// Largest handle issued so far (0 when empty).
    last_handle: u32,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty graph holding only the source and sink nodes.
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            num_nodes: NodeIndex::FIRST_NON_SOURCE_SINK.index(),
            num_locations: 0,
            last_handle: LocationHandle::ST.raw(),
        }
    }

    /// Create an empty graph with room for `num_edges` edges.
    pub fn with_capacity(num_edges: usize) -> Self {
        let mut graph = Self::new();
        graph.reserve(num_edges);
        graph
    }

    /// Reserve space for `num_edges` edges in total.
    ///
    /// A capacity hint only; repeated calls never change the graph.
    pub fn reserve(&mut self, num_edges: usize) {
        self.edges.reserve(num_edges.saturating_sub(self.edges.len()));
    }

    /// Add a location and return its handle.
    ///
    /// Creates the location's entry and exit nodes and the observation edge
    /// between them. `cost` is not validated; negative costs are expected.
    pub fn add(&mut self, cost: Cost) -> LocationHandle {
        let handle = self.next_handle();
        let entry = entry_node(handle);
        let exit = exit_node(handle);

        self.edges.push(Edge::new(entry, exit, cost));
        self.num_nodes = exit.index() + 1;
        self.num_locations += 1;
        self.last_handle = handle.raw();

        trace!(%handle, %entry, %exit, cost, "added location");
        handle
    }

    /// Like [`Graph::add`], but rejects NaN and infinite costs.
    pub fn try_add(&mut self, cost: Cost) -> GraphResult<LocationHandle> {
        let cost = ensure_finite(cost, "observation cost")?;
        let next = self.next_handle();
        if next > LocationHandle::MAX {
            return Err(McfError::IndexOob {
                what: "location handle",
                index: next.raw() as usize,
                len: LocationHandle::MAX.raw() as usize + 1,
            }
            .into());
        }
        Ok(self.add(cost))
    }

    /// Handle the next `add` will return.
    ///
    /// Rounds up so a manually overwritten odd node count is never aliased,
    /// and never goes below the first location-derived node.
    fn next_handle(&self) -> LocationHandle {
        let floor = self
            .num_nodes
            .max(NodeIndex::FIRST_NON_SOURCE_SINK.index());
        LocationHandle::from_raw(floor.div_ceil(2))
    }

    /// Link two locations with a transition edge.
    ///
    /// The edge runs from the exit node of `src` (the source if `src` is
    /// `ST`) to the entry node of `dst` (the sink if `dst` is `ST`).
    ///
    /// Handles are not checked: passing a handle that was never returned by
    /// [`Graph::add`] silently produces an edge to a node that does not exist.
    /// Use [`Graph::try_link`] when the caller cannot guarantee that.
    pub fn link(&mut self, src: LocationHandle, dst: LocationHandle, cost: Cost) {
        let from = exit_node(src);
        let to = entry_node(dst);
        self.edges.push(Edge::new(from, to, cost));

        trace!(%src, %dst, %from, %to, cost, "linked locations");
    }

    /// Like [`Graph::link`], but checks both handles and the cost first.
    pub fn try_link(
        &mut self,
        src: LocationHandle,
        dst: LocationHandle,
        cost: Cost,
    ) -> GraphResult<()> {
        self.check_handle(src)?;
        self.check_handle(dst)?;
        let cost = ensure_finite(cost, "transition cost")?;
        self.link(src, dst, cost);
        Ok(())
    }

    fn check_handle(&self, handle: LocationHandle) -> GraphResult<()> {
        if handle.is_st() || handle.raw() <= self.last_handle {
            Ok(())
        } else {
            Err(GraphError::UnknownLocation {
                handle,
                num_locations: self.num_locations,
            })
        }
    }

    /// All edges, in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Total number of internal nodes, source and sink included.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes as usize
    }

    /// Number of `add` calls so far.
    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    /// Issued location handles, in creation order.
    ///
    /// Read off the observation edges, so handles skipped after an
    /// overwritten node count are not reported.
    pub fn locations(&self) -> impl Iterator<Item = LocationHandle> + '_ {
        self.edges.iter().filter_map(|edge| {
            match (node_role(edge.source_index), node_role(edge.target_index)) {
                (NodeRole::Entry(h), NodeRole::Exit(k)) if h == k => Some(h),
                _ => None,
            }
        })
    }

    /// Grant a solver in-place access to the internal structure.
    pub fn solver_access(&mut self) -> SolverAccess<'_> {
        SolverAccess::new(self)
    }

    /// Check the internal structure before handing it to a solver.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_edges(&self.edges, self.num_nodes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(raw: u32) -> LocationHandle {
        LocationHandle::from_raw(raw)
    }

    #[test]
    fn empty_graph_has_source_and_sink() {
        let graph = Graph::new();
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.num_locations(), 0);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn add_creates_observation_edge() {
        let mut graph = Graph::new();
        let a = graph.add(-3.5);

        assert_eq!(a, h(1));
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(
            graph.edges(),
            &[Edge::new(
                NodeIndex::from_index(2),
                NodeIndex::from_index(3),
                -3.5
            )]
        );
    }

    #[test]
    fn link_uses_exit_and_entry_nodes() {
        let mut graph = Graph::new();
        let a = graph.add(1.0);
        let b = graph.add(2.0);
        graph.link(a, b, 0.3);

        let edge = graph.edges()[2];
        assert_eq!(edge.source_index, exit_node(a));
        assert_eq!(edge.target_index, entry_node(b));
        assert_eq!(edge.cost, 0.3);
        assert_eq!(graph.num_nodes(), 6);
    }

    #[test]
    fn st_aliases_source_and_sink() {
        let mut graph = Graph::new();
        let a = graph.add(0.0);
        graph.link(LocationHandle::ST, a, 0.5);
        graph.link(a, LocationHandle::ST, 0.5);

        let from_source = graph.edges()[1];
        let to_sink = graph.edges()[2];
        assert_eq!(from_source.source_index, NodeIndex::SOURCE);
        assert_eq!(to_sink.target_index, NodeIndex::SINK);
        assert_ne!(from_source.source_index, to_sink.target_index);
    }

    #[test]
    fn reserve_is_only_a_hint() {
        let mut graph = Graph::new();
        graph.add(1.0);
        graph.reserve(0);
        graph.reserve(1_000);
        graph.reserve(1_000);
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.num_nodes(), 4);
        assert!(graph.edges.capacity() >= 1_000);
    }

    #[test]
    fn try_add_rejects_nan() {
        let mut graph = Graph::new();
        assert!(matches!(graph.try_add(f64::NAN), Err(GraphError::Core(_))));
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.try_add(-1.0).unwrap(), h(1));
    }

    #[test]
    fn try_link_rejects_unknown_handle() {
        let mut graph = Graph::new();
        let a = graph.add(1.0);

        let err = graph.try_link(a, h(2), 0.1).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownLocation {
                handle: h(2),
                num_locations: 1
            }
        );
        assert_eq!(graph.edges().len(), 1);

        graph.try_link(LocationHandle::ST, a, 0.1).unwrap();
        graph.try_link(a, LocationHandle::ST, 0.1).unwrap();
        assert_eq!(graph.edges().len(), 3);
    }

    #[test]
    fn add_after_zeroed_node_count_never_returns_st() {
        let mut graph = Graph::new();
        graph.solver_access().overwrite_num_nodes(0);

        let a = graph.add(1.0);
        assert!(!a.is_st());
        assert_eq!(a, h(1));
        assert_eq!(graph.edges()[0].source_index, NodeIndex::FIRST_NON_SOURCE_SINK);
        assert_eq!(graph.num_nodes(), 4);
    }

    #[test]
    fn try_add_rejects_handle_past_ceiling() {
        let mut graph = Graph::new();
        graph.solver_access().overwrite_num_nodes(u32::MAX);

        let err = graph.try_add(1.0).unwrap_err();
        assert_eq!(
            err,
            GraphError::Core(McfError::IndexOob {
                what: "location handle",
                index: 1 << 31,
                len: 1 << 31,
            })
        );
        assert!(graph.edges().is_empty());
        assert_eq!(graph.num_nodes(), u32::MAX as usize);
    }

    #[test]
    fn try_link_rejects_handle_past_ceiling_without_overflow() {
        let mut graph = Graph::new();
        graph.add(1.0);

        let huge = h(1 << 31);
        assert!(matches!(
            graph.try_link(huge, LocationHandle::ST, 0.0),
            Err(GraphError::UnknownLocation { .. })
        ));
        assert!(graph.try_link(LocationHandle::ST, h(u32::MAX), 0.0).is_err());
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn add_after_odd_overwrite_does_not_alias() {
        let mut graph = Graph::new();
        graph.add(1.0);
        graph.solver_access().overwrite_num_nodes(5);

        let b = graph.add(2.0);
        assert_eq!(b, h(3));
        assert_eq!(entry_node(b).index(), 6);
        assert_eq!(graph.num_nodes(), 8);
    }
}
