//! Graph vocabulary: [`Node`], [`Edge`] and [`Cost`].
//!
//! A node is an opaque identity; what it
//! denotes (a grid cell, a road junction, ...) is up to the graph that
//! hands it out.

use std::fmt;

/// Integer path cost. Edge weights are non-negative by construction.
pub type Cost = u32;

/// Opaque node identity, unique within one graph instance.
///
/// The total order is used to break ties between equal priorities in the
/// search frontier, so two searches over the same graph always explore in
/// the same order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node(pub usize);

impl Node {
    /// The raw identity.
    #[inline]
    pub const fn id(self) -> usize {
        self.0
    }
}

impl From<usize> for Node {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One directed traversal step: the node reached and what it costs to get
/// there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub target: Node,
    pub weight: Cost,
}

impl Edge {
    /// Create a new edge.
    #[inline]
    pub const fn new(target: Node, weight: Cost) -> Self {
        Self { target, weight }
    }
}
