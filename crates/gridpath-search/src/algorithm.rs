use std::fmt;
use std::str::FromStr;

use gridpath_core::Node;

use crate::observer::Observer;
use crate::result::AlgoResult;
use crate::{Graph, astar, bfs, dijkstra};

/// Selector for one of the three search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    #[default]
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every strategy, in menu order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::Bfs, Algorithm::AStar];

    /// Run this strategy from `start` to `end`.
    pub fn run<G, O>(self, graph: &G, start: Node, end: Node, observer: &mut O) -> AlgoResult
    where
        G: Graph + ?Sized,
        O: Observer + ?Sized,
    {
        match self {
            Self::Bfs => bfs(graph, start, end, observer),
            Self::Dijkstra => dijkstra(graph, start, end, observer),
            Self::AStar => astar(graph, start, end, observer),
        }
    }

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "Breadth-First Search",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        })
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
