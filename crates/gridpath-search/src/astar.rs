use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

use gridpath_core::{Cost, Node};

use crate::Graph;
use crate::observer::Observer;
use crate::result::{AlgoResult, Parents, QueueEntry, conclude};

/// A* search from `start` to `end`, guided by [`Graph::heuristic`].
///
/// Nodes are ordered by `g + h`, where `g` is the best known cost so far.
/// With an admissible heuristic the reported cost (the final `g` of `end`)
/// equals the one [`dijkstra`](crate::dijkstra) reports; only the
/// exploration order changes.
pub fn astar<G, O>(graph: &G, start: Node, end: Node, observer: &mut O) -> AlgoResult
where
    G: Graph + ?Sized,
    O: Observer + ?Sized,
{
    let started = Instant::now();

    let mut g_score: HashMap<Node, Cost> = HashMap::new();
    let mut parents: Parents = Parents::new();
    let mut open: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut ebuf = Vec::with_capacity(8);
    let mut visited = 0usize;

    g_score.insert(start, 0);
    parents.insert(start, None);
    open.push(QueueEntry {
        priority: graph.heuristic(start, end),
        cost: 0,
        node: start,
    });
    observer.on_log(format_args!("A*: starting from {start} towards {end}"));

    let reached = 'search: loop {
        let Some(QueueEntry { cost: g, node: current, .. }) = open.pop() else {
            break 'search None;
        };

        // An entry pushed before `current` was improved: its g is outdated.
        if g_score.get(&current).is_some_and(|&best| g > best) {
            continue;
        }

        visited += 1;
        observer.on_node_current(current);
        observer.on_node_visited(current);

        if current == end {
            break 'search Some(g);
        }

        ebuf.clear();
        graph.neighbors(current, &mut ebuf);

        for edge in ebuf.iter() {
            let tentative_g = g.saturating_add(edge.weight);
            if g_score.get(&edge.target).is_some_and(|&best| tentative_g >= best) {
                continue;
            }

            g_score.insert(edge.target, tentative_g);
            parents.insert(edge.target, Some(current));
            let f = tentative_g.saturating_add(graph.heuristic(edge.target, end));
            open.push(QueueEntry {
                priority: f,
                cost: tentative_g,
                node: edge.target,
            });
            observer.on_log(format_args!("A*: {} f-score {f}", edge.target));
        }
    };

    match reached {
        Some(g) => observer.on_log(format_args!("A*: target {end} reached with cost {g}")),
        None => observer.on_log(format_args!("A*: no path could be found to {end}")),
    }
    conclude("astar", &parents, start, end, reached, visited, started)
}
