use std::collections::HashMap;
use std::time::{Duration, Instant};

use gridpath_core::{Cost, Node};

/// Parent links recorded during a search. The start node maps to `None`.
pub(crate) type Parents = HashMap<Node, Option<Node>>;

/// Outcome of one search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgoResult {
    /// Nodes from start to end inclusive; empty unless `success`.
    pub path: Vec<Node>,
    /// Number of nodes expanded.
    pub visited: usize,
    /// Hop count for BFS, accumulated edge weight otherwise; 0 on failure.
    pub cost: Cost,
    /// Wall-clock time spent in the search. Diagnostic only.
    pub elapsed: Duration,
    pub success: bool,
}

impl AlgoResult {
    /// A result for a search that did not produce a path.
    pub fn not_found(visited: usize, elapsed: Duration) -> Self {
        Self {
            path: Vec::new(),
            visited,
            cost: 0,
            elapsed,
            success: false,
        }
    }

    /// Number of steps on the path (path length − 1), or 0 without a path.
    #[inline]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Walk the parent links back from `end` to `start` and return the path in
/// start-to-end order.
///
/// Returns `None` when the chain is broken: a node along the way has no
/// recorded parent, or the walk ends somewhere other than `start`.
pub fn reconstruct_path(
    parents: &HashMap<Node, Option<Node>>,
    start: Node,
    end: Node,
) -> Option<Vec<Node>> {
    let mut path = Vec::new();
    let mut cur = end;
    loop {
        path.push(cur);
        if cur == start {
            break;
        }
        match parents.get(&cur) {
            Some(Some(parent)) => cur = *parent,
            // Reached a root that isn't `start`, or fell off the map.
            Some(None) | None => return None,
        }
        // A cycle in the links can never reach `start`.
        if path.len() > parents.len() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

/// Build the final result once the frontier loop is over.
///
/// `reached` carries the finalized cost of `end` when the target was taken
/// off the frontier.
pub(crate) fn conclude(
    name: &str,
    parents: &Parents,
    start: Node,
    end: Node,
    reached: Option<Cost>,
    visited: usize,
    started: Instant,
) -> AlgoResult {
    let result = match reached {
        Some(cost) => match reconstruct_path(parents, start, end) {
            Some(path) => AlgoResult {
                path,
                visited,
                cost,
                elapsed: started.elapsed(),
                success: true,
            },
            None => {
                log::warn!("{name}: target {end} reached but its parent chain is broken");
                AlgoResult::not_found(visited, started.elapsed())
            }
        },
        None => AlgoResult::not_found(visited, started.elapsed()),
    };
    log::debug!(
        "{name}: {start} -> {end} success={} visited={} cost={} elapsed={:?}",
        result.success,
        result.visited,
        result.cost,
        result.elapsed
    );
    result
}

// ---------------------------------------------------------------------------
// Priority-queue entry for Dijkstra / A*
// ---------------------------------------------------------------------------

/// Frontier entry. `cost` is the accumulated cost the node was pushed with,
/// `priority` is what the queue orders on (equal to `cost` for Dijkstra).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct QueueEntry {
    pub(crate) priority: Cost,
    pub(crate) cost: Cost,
    pub(crate) node: Node,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // breaking ties on the smaller node.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.cost.cmp(&self.cost))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
