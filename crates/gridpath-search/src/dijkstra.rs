use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

use gridpath_core::{Cost, Node};

use crate::Graph;
use crate::observer::Observer;
use crate::result::{AlgoResult, Parents, QueueEntry, conclude};

/// Uniform-cost (Dijkstra) search from `start` to `end`.
///
/// The reported cost is the finalized distance of `end`. The frontier may
/// hold several entries for one node; the outdated ones are dropped when
/// popped and are neither counted nor observed.
pub fn dijkstra<G, O>(graph: &G, start: Node, end: Node, observer: &mut O) -> AlgoResult
where
    G: Graph + ?Sized,
    O: Observer + ?Sized,
{
    let started = Instant::now();

    let mut dist: HashMap<Node, Cost> = HashMap::new();
    let mut parents: Parents = Parents::new();
    let mut open: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut ebuf = Vec::with_capacity(8);
    let mut visited = 0usize;

    dist.insert(start, 0);
    parents.insert(start, None);
    open.push(QueueEntry {
        priority: 0,
        cost: 0,
        node: start,
    });
    observer.on_log(format_args!("Dijkstra: starting from {start} towards {end}"));

    let mut reached = None;
    while let Some(QueueEntry { cost: d, node: current, .. }) = open.pop() {
        // Skip stale entries.
        if dist.get(&current).is_some_and(|&best| d > best) {
            continue;
        }

        visited += 1;
        observer.on_node_current(current);
        observer.on_node_visited(current);

        if current == end {
            reached = Some(d);
            observer.on_log(format_args!("Dijkstra: target {end} reached at distance {d}"));
            break;
        }

        ebuf.clear();
        graph.neighbors(current, &mut ebuf);

        for edge in ebuf.iter() {
            let nd = d.saturating_add(edge.weight);
            if dist.get(&edge.target).is_none_or(|&best| nd < best) {
                dist.insert(edge.target, nd);
                parents.insert(edge.target, Some(current));
                open.push(QueueEntry {
                    priority: nd,
                    cost: nd,
                    node: edge.target,
                });
                observer.on_log(format_args!(
                    "Dijkstra: {} reachable with distance {nd}",
                    edge.target
                ));
            }
        }
    }

    if reached.is_none() {
        observer.on_log(format_args!("Dijkstra: frontier exhausted, no path found"));
    }
    conclude("dijkstra", &parents, start, end, reached, visited, started)
}
