//! Running a search on a [`Grid`] and projecting the outcome back to cells.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use gridpath_core::{Node, Point};
use gridpath_search::{Algorithm, AlgoResult, Observer};

use crate::grid::Grid;

/// Outcome of [`solve`], in cell coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    /// Cells from source to destination inclusive; empty on failure.
    pub path: Vec<Point>,
    /// Cells in the order they were expanded.
    pub visited: Vec<Point>,
    /// The raw engine result.
    pub result: AlgoResult,
}

impl Solution {
    #[inline]
    pub fn success(&self) -> bool {
        self.result.success
    }
}

struct Recorder<'a> {
    grid: &'a Grid,
    visited: Vec<Point>,
}

impl Observer for Recorder<'_> {
    fn on_node_visited(&mut self, node: Node) {
        self.visited.push(self.grid.point(node));
    }

    fn on_log(&mut self, message: fmt::Arguments<'_>) {
        log::trace!("{message}");
    }
}

/// Run `algorithm` from the grid's source to its destination.
pub fn solve(grid: &Grid, algorithm: Algorithm) -> Solution {
    let mut rec = Recorder {
        grid,
        visited: Vec::new(),
    };
    let result = algorithm.run(grid, grid.source_node(), grid.destination_node(), &mut rec);
    let path = result.path.iter().map(|&n| grid.point(n)).collect();
    Solution {
        path,
        visited: rec.visited,
        result,
    }
}

/// Observer that paints search progress onto a shared display grid.
///
/// The grid being searched and the display grid are distinct values, so a
/// renderer can lock and draw the display while the search runs on another
/// thread.
#[derive(Debug, Clone)]
pub struct PaintObserver {
    display: Arc<Mutex<Grid>>,
    current: Option<Point>,
}

impl PaintObserver {
    pub fn new(display: Arc<Mutex<Grid>>) -> Self {
        Self {
            display,
            current: None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Grid> {
        self.display.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Demote the last current cell to visited.
    pub fn finish(&mut self) {
        if let Some(p) = self.current.take() {
            self.lock().mark_visited(p);
        }
    }
}

impl Observer for PaintObserver {
    fn on_node_current(&mut self, node: Node) {
        let prev = self.current;
        let mut grid = self.lock();
        let p = grid.point(node);
        if let Some(prev) = prev {
            grid.mark_visited(prev);
        }
        grid.mark_current(p);
        drop(grid);
        self.current = Some(p);
    }

    fn on_log(&mut self, message: fmt::Arguments<'_>) {
        log::debug!("{message}");
    }
}
