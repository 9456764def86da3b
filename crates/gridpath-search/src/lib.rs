//! Shortest-path search over weighted graphs.
//!
//! This crate provides three interchangeable search strategies, all written
//! against the [`Graph`] trait:
//!
//! - **BFS** over unweighted hop count ([`bfs`])
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **A\*** heuristic-guided search ([`astar`])
//!
//! Every strategy returns the same [`AlgoResult`] and reports its progress to
//! an [`Observer`] as nodes are explored. Pass [`Silent`] when nothing needs
//! to watch.
//!
//! # Example
//!
//! ```
//! use gridpath_core::Node;
//! use gridpath_search::{AdjacencyGraph, Silent, dijkstra};
//!
//! let mut g = AdjacencyGraph::new(3);
//! g.add_edge(Node(0), Node(1), 4);
//! g.add_edge(Node(1), Node(2), 4);
//! g.add_edge(Node(0), Node(2), 10);
//!
//! let res = dijkstra(&g, Node(0), Node(2), &mut Silent);
//! assert!(res.success);
//! assert_eq!(res.cost, 8);
//! assert_eq!(res.path, vec![Node(0), Node(1), Node(2)]);
//! ```

mod adjacency;
mod algorithm;
mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod observer;
mod result;
mod traits;

pub use adjacency::AdjacencyGraph;
pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::astar;
pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use distance::{manhattan, octile};
pub use observer::{LogObserver, Observer, Silent};
pub use result::{AlgoResult, reconstruct_path};
pub use traits::Graph;
