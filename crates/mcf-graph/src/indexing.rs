//! Mapping between public location handles and internal node indices.
//!
//! Location `h` owns the node pair `(2h, 2h + 1)`: the entry node and the exit
//! node. The reserved handle `ST = 0` therefore maps onto the fixed pair
//!
//! ```text
//! entry_node(ST) = 0 = NodeIndex::SINK
//! exit_node(ST)  = 1 = NodeIndex::SOURCE
//! ```
//!
//! so a link always runs from `exit_node(src)` to `entry_node(dst)`, and
//! `ST` lands on the source as an origin and on the sink as a target with no
//! special case.
//!
//! Handles above [`LocationHandle::MAX`] have no node pair in the `u32` index
//! space. The mapping does not check for them; `Graph` never issues one and
//! the checked `try_*` path rejects them.

use mcf_core::{LocationHandle, NodeIndex};

/// What an internal node stands for in the public handle space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Sink,
    Source,
    /// Entry node of a location; transitions arrive here.
    Entry(LocationHandle),
    /// Exit node of a location; transitions leave from here.
    Exit(LocationHandle),
}

/// Entry node of a location (the sink for `ST`).
#[inline]
pub fn entry_node(handle: LocationHandle) -> NodeIndex {
    NodeIndex::from_index(2 * handle.raw())
}

/// Exit node of a location (the source for `ST`).
#[inline]
pub fn exit_node(handle: LocationHandle) -> NodeIndex {
    NodeIndex::from_index(2 * handle.raw() + 1)
}

/// Invert the mapping.
pub fn node_role(node: NodeIndex) -> NodeRole {
    match node {
        NodeIndex::SINK => NodeRole::Sink,
        NodeIndex::SOURCE => NodeRole::Source,
        _ => {
            let handle = LocationHandle::from_raw(node.index() / 2);
            if node.index() % 2 == 0 {
                NodeRole::Entry(handle)
            } else {
                NodeRole::Exit(handle)
            }
        }
    }
}

impl NodeRole {
    /// The location this node belongs to, `None` for source and sink.
    pub fn location(self) -> Option<LocationHandle> {
        match self {
            NodeRole::Entry(h) | NodeRole::Exit(h) => Some(h),
            NodeRole::Sink | NodeRole::Source => None,
        }
    }
}
