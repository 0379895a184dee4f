use core::fmt;

/// Public identifier for a location, as returned by `Graph::add`.
///
/// Handles of real locations are strictly positive. The value `0` is
/// reserved for [`LocationHandle::ST`], which stands for the source when used
/// as a link origin and for the sink when used as a link target.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationHandle(u32);

impl LocationHandle {
    /// One common handle for source and sink.
    pub const ST: Self = Self(0);

    /// Largest handle whose exit node `2h + 1` still fits in a `u32`.
    pub const MAX: Self = Self((u32::MAX - 1) / 2);

    /// Wrap a raw handle value. No check is made that it was ever issued.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// True for the reserved source/sink handle.
    pub const fn is_st(self) -> bool {
        self.0 == Self::ST.0
    }
}

impl fmt::Debug for LocationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_st() {
            write!(f, "LocationHandle(ST)")
        } else {
            write!(f, "LocationHandle({})", self.0)
        }
    }
}

impl fmt::Display for LocationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Solver-facing node identifier.
///
/// - `u32` keeps `Edge` at 16 bytes
/// - indices `0` and `1` are the fixed sink and source nodes
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeIndex(u32);

impl NodeIndex {
    pub const SINK: Self = Self(0);
    pub const SOURCE: Self = Self(1);
    /// First index available for location-derived nodes.
    pub const FIRST_NON_SOURCE_SINK: Self = Self(2);

    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u32 {
        self.0
    }

    /// Index widened for slice access.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
