use gridpath_core::{Cost, Edge, Node};

/// The graph interface every search strategy is written against.
pub trait Graph {
    /// Append the traversable edges leaving `node` into `buf`. The caller
    /// clears `buf` before calling.
    ///
    /// Edge order only matters for tie-breaking: searches over the same graph
    /// explore equal-priority nodes in the order they were produced.
    fn neighbors(&self, node: Node, buf: &mut Vec<Edge>);

    /// Estimate of the remaining cost from `from` to `to`.
    ///
    /// Must never overestimate the true cost (admissible) for A* to stay
    /// optimal. The default of zero turns A* into Dijkstra.
    fn heuristic(&self, _from: Node, _to: Node) -> Cost {
        0
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    #[inline]
    fn neighbors(&self, node: Node, buf: &mut Vec<Edge>) {
        (**self).neighbors(node, buf)
    }

    #[inline]
    fn heuristic(&self, from: Node, to: Node) -> Cost {
        (**self).heuristic(from, to)
    }
}
