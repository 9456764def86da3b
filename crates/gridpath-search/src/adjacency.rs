use gridpath_core::{Cost, Edge, Node};

use crate::Graph;

/// A sparse directed graph stored as per-node edge lists.
///
/// Nodes are `Node(0)..Node(n)`. Neighbours are reported in insertion
/// order and the heuristic is the uninformative default.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    edges: Vec<Vec<Edge>>,
}

impl AdjacencyGraph {
    /// Create a graph with `nodes` nodes and no edges.
    pub fn new(nodes: usize) -> Self {
        Self {
            edges: vec![Vec::new(); nodes],
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Add a directed edge, growing the node set if needed.
    pub fn add_edge(&mut self, from: Node, to: Node, weight: Cost) {
        let needed = from.0.max(to.0) + 1;
        if self.edges.len() < needed {
            self.edges.resize_with(needed, Vec::new);
        }
        self.edges[from.0].push(Edge::new(to, weight));
    }

    /// Add the edge in both directions.
    pub fn add_undirected_edge(&mut self, a: Node, b: Node, weight: Cost) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }
}

impl Graph for AdjacencyGraph {
    fn neighbors(&self, node: Node, buf: &mut Vec<Edge>) {
        if let Some(out) = self.edges.get(node.0) {
            buf.extend_from_slice(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_grows_node_set() {
        let mut g = AdjacencyGraph::new(1);
        g.add_edge(Node(0), Node(4), 3);
        assert_eq!(g.node_count(), 5);

        let mut buf = Vec::new();
        g.neighbors(Node(0), &mut buf);
        assert_eq!(buf, vec![Edge::new(Node(4), 3)]);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let g = AdjacencyGraph::new(2);
        let mut buf = Vec::new();
        g.neighbors(Node(9), &mut buf);
        assert!(buf.is_empty());
        assert_eq!(g.heuristic(Node(0), Node(1)), 0);
    }
}
