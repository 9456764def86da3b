use std::collections::VecDeque;
use std::collections::hash_map::Entry;
use std::time::Instant;

use gridpath_core::{Cost, Node};

use crate::Graph;
use crate::observer::Observer;
use crate::result::{AlgoResult, Parents, conclude};

/// Breadth-first search from `start` to `end`.
///
/// Edge weights are ignored: the reported cost is the hop count of the path
/// (path length − 1), which is the minimum number of edges between the two
/// nodes.
pub fn bfs<G, O>(graph: &G, start: Node, end: Node, observer: &mut O) -> AlgoResult
where
    G: Graph + ?Sized,
    O: Observer + ?Sized,
{
    let started = Instant::now();

    let mut parents: Parents = Parents::new();
    let mut queue: VecDeque<(Node, Cost)> = VecDeque::new();
    let mut ebuf = Vec::with_capacity(8);
    let mut visited = 0usize;

    parents.insert(start, None);
    queue.push_back((start, 0));
    observer.on_log(format_args!("BFS: starting from {start} towards {end}"));

    let mut reached = None;
    while let Some((current, depth)) = queue.pop_front() {
        visited += 1;
        observer.on_node_current(current);
        observer.on_node_visited(current);

        if current == end {
            reached = Some(depth);
            observer.on_log(format_args!("BFS: target {end} reached after {depth} hops"));
            break;
        }

        ebuf.clear();
        graph.neighbors(current, &mut ebuf);

        for edge in ebuf.iter() {
            if let Entry::Vacant(slot) = parents.entry(edge.target) {
                slot.insert(Some(current));
                queue.push_back((edge.target, depth + 1));
                observer.on_log(format_args!("BFS: enqueuing {}", edge.target));
            }
        }
    }

    let res = conclude("bfs", &parents, start, end, reached, visited, started);
    if res.success {
        observer.on_log(format_args!("BFS: finished, path of {} hops", res.cost));
    } else {
        observer.on_log(format_args!("BFS: finished, no path found"));
    }
    res
}
