//! The [`Grid`] type, a weighted obstacle lattice with one source and one
//! destination.
//!
//! Cells are addressed by [`Point`] with `x` the column and `y` the row. The
//! graph node of a cell is its row-major index, `y * width + x`.

use std::fmt;

use gridpath_core::{Cost, Edge, Node, Point, Range};
use gridpath_search::{Graph, manhattan, octile};

use crate::cell::CellKind;

/// Base cost of a straight (orthogonal) step.
pub const STRAIGHT_COST: Cost = 10;
/// Base cost of a diagonal step.
pub const DIAGONAL_COST: Cost = 14;
/// Terrain weight of a fresh cell. Also the minimum.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Up, down, left, right.
const ORTHOGONAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Up-left, up-right, down-left, down-right.
const DIAGONAL: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A weighted obstacle grid.
///
/// There is always exactly one source and one destination, both in bounds
/// and never obstacles. Every editing call validates its coordinates and is
/// a no-op out of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) bounds: Range,
    pub(crate) cells: Vec<CellKind>,
    pub(crate) weights: Vec<u32>,
    pub(crate) source: Point,
    pub(crate) destination: Point,
    pub(crate) diagonals: bool,
}

impl Grid {
    /// Create an empty grid of the given dimensions (each clamped to ≥ 1),
    /// with the source in the top-left corner and the destination in the
    /// bottom-right corner.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(1), height.max(1));
        let len = bounds.len();
        let mut grid = Self {
            bounds,
            cells: vec![CellKind::Empty; len],
            weights: vec![DEFAULT_WEIGHT; len],
            source: Point::ZERO,
            destination: bounds.max.shift(-1, -1),
            diagonals: false,
        };
        grid.stamp_endpoints();
        grid
    }

    /// Write the endpoint markers. The source wins if both share a cell.
    pub(crate) fn stamp_endpoints(&mut self) {
        if let Some(i) = self.idx(self.destination) {
            self.cells[i] = CellKind::Destination;
        }
        if let Some(i) = self.idx(self.source) {
            self.cells[i] = CellKind::Source;
        }
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// The graph node of the cell at `p`, or `None` out of bounds.
    #[inline]
    pub fn node(&self, p: Point) -> Option<Node> {
        self.idx(p).map(Node)
    }

    /// The cell a node stands for. Inverse of [`node`](Self::node).
    #[inline]
    pub fn point(&self, node: Node) -> Point {
        let w = self.width() as usize;
        Point::new((node.0 % w) as i32, (node.0 / w) as i32)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The kind of the cell at `p`, or `None` out of bounds.
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// The terrain weight of the cell at `p`, or `None` out of bounds.
    pub fn weight(&self, p: Point) -> Option<u32> {
        self.idx(p).map(|i| self.weights[i])
    }

    /// Whether `p` blocks movement. Out-of-bounds points do.
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.kind(p).is_none_or(|k| !k.is_passable())
    }

    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> Point {
        self.destination
    }

    /// Node of the source cell.
    #[inline]
    pub fn source_node(&self) -> Node {
        Node(self.source.y as usize * self.width() as usize + self.source.x as usize)
    }

    /// Node of the destination cell.
    #[inline]
    pub fn destination_node(&self) -> Node {
        Node(self.destination.y as usize * self.width() as usize + self.destination.x as usize)
    }

    /// Whether diagonal movement is enabled.
    #[inline]
    pub fn diagonals(&self) -> bool {
        self.diagonals
    }

    /// Enable or disable diagonal movement.
    pub fn set_diagonals(&mut self, allow: bool) {
        self.diagonals = allow;
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Block the cell at `p`. Endpoints cannot be blocked.
    pub fn set_obstacle(&mut self, p: Point) {
        let Some(i) = self.idx(p) else {
            return;
        };
        if self.cells[i].is_endpoint() {
            return;
        }
        self.cells[i] = CellKind::Obstacle;
    }

    /// Move the source to `p`. The old source cell becomes empty. No-op if
    /// `p` is the destination.
    pub fn set_source(&mut self, p: Point) {
        if !self.contains(p) || p == self.destination {
            return;
        }
        if let Some(old) = self.idx(self.source) {
            self.cells[old] = CellKind::Empty;
        }
        self.source = p;
        self.stamp_endpoints();
    }

    /// Move the destination to `p`. The old destination cell becomes empty.
    /// No-op if `p` is the source.
    pub fn set_destination(&mut self, p: Point) {
        if !self.contains(p) || p == self.source {
            return;
        }
        if let Some(old) = self.idx(self.destination) {
            self.cells[old] = CellKind::Empty;
        }
        self.destination = p;
        self.stamp_endpoints();
    }

    /// Set the terrain weight of the cell at `p` (clamped to ≥ 1).
    ///
    /// An obstacle or marker under `p` is cleared so the weight applies.
    /// Step costs into a very heavy cell saturate at [`Cost::MAX`].
    pub fn set_weight(&mut self, p: Point, weight: u32) {
        let Some(i) = self.idx(p) else {
            return;
        };
        self.weights[i] = weight.max(DEFAULT_WEIGHT);
        if !self.cells[i].is_endpoint() {
            self.cells[i] = CellKind::Empty;
        }
    }

    /// Reset the cell at `p` to an empty cell of default weight. Endpoints
    /// are left alone.
    pub fn set_empty(&mut self, p: Point) {
        let Some(i) = self.idx(p) else {
            return;
        };
        if self.cells[i].is_endpoint() {
            return;
        }
        self.cells[i] = CellKind::Empty;
        self.weights[i] = DEFAULT_WEIGHT;
    }

    /// Erase every path, visited and current marker.
    pub fn clear_path(&mut self) {
        for c in self.cells.iter_mut().filter(|c| c.is_marker()) {
            *c = CellKind::Empty;
        }
    }

    // -----------------------------------------------------------------------
    // Presentation markers
    // -----------------------------------------------------------------------

    /// Mark the cell at `p` as explored. Endpoints and obstacles are left
    /// alone.
    pub fn mark_visited(&mut self, p: Point) {
        self.mark(p, CellKind::Visited);
    }

    /// Mark the cell at `p` as the current frontier head. Endpoints and
    /// obstacles are left alone.
    pub fn mark_current(&mut self, p: Point) {
        self.mark(p, CellKind::Current);
    }

    /// Mark every cell of `path` as part of the path. Endpoints keep their
    /// marker.
    pub fn mark_path(&mut self, path: &[Point]) {
        for &p in path {
            self.mark(p, CellKind::Path);
        }
    }

    fn mark(&mut self, p: Point, marker: CellKind) {
        let Some(i) = self.idx(p) else {
            return;
        };
        let c = self.cells[i];
        if c.is_endpoint() || !c.is_passable() {
            return;
        }
        self.cells[i] = marker;
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

impl Graph for Grid {
    fn neighbors(&self, node: Node, buf: &mut Vec<Edge>) {
        let p = self.point(node);
        if !self.contains(p) {
            return;
        }
        let mut push = |d: Point, base: Cost| {
            let np = p + d;
            let Some(ni) = self.idx(np) else {
                return;
            };
            if self.cells[ni].is_passable() {
                buf.push(Edge::new(Node(ni), base.saturating_mul(self.weights[ni])));
            }
        };
        for d in ORTHOGONAL {
            push(d, STRAIGHT_COST);
        }
        if self.diagonals {
            for d in DIAGONAL {
                push(d, DIAGONAL_COST);
            }
        }
    }

    fn heuristic(&self, from: Node, to: Node) -> Cost {
        let (a, b) = (self.point(from), self.point(to));
        if self.diagonals {
            octile(a, b, STRAIGHT_COST, DIAGONAL_COST)
        } else {
            manhattan(a, b).saturating_mul(STRAIGHT_COST)
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Console dump: a column-index header, then one line per row prefixed with
/// the row index. Indices are printed modulo 10.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..self.width() {
            write!(f, "{} ", x % 10)?;
        }
        writeln!(f)?;
        for y in 0..self.height() {
            write!(f, "{} ", y % 10)?;
            for x in 0..self.width() {
                let kind = self.kind(Point::new(x, y)).unwrap_or_default();
                write!(f, "{} ", kind.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_search::{Silent, astar, bfs, dijkstra};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn edges(g: &Grid, p: Point) -> Vec<(Point, Cost)> {
        let mut buf = Vec::new();
        g.neighbors(g.node(p).unwrap(), &mut buf);
        buf.iter().map(|e| (g.point(e.target), e.weight)).collect()
    }

    fn random_grid(seed: u64, w: i32, h: i32, diagonals: bool) -> Grid {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g = Grid::new(w, h);
        g.set_diagonals(diagonals);
        for p in g.bounds().iter() {
            match rng.random_range(0..10) {
                0..=2 => g.set_obstacle(p),
                3..=4 => g.set_weight(p, rng.random_range(2..=9)),
                _ => {}
            }
        }
        g
    }

    // -- construction and coordinates ---------------------------------------

    #[test]
    fn new_places_endpoints_in_corners() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.source(), Point::new(0, 0));
        assert_eq!(g.destination(), Point::new(3, 2));
        assert_eq!(g.kind(Point::new(0, 0)), Some(CellKind::Source));
        assert_eq!(g.kind(Point::new(3, 2)), Some(CellKind::Destination));
        assert_eq!(g.weight(Point::new(1, 1)), Some(DEFAULT_WEIGHT));
        assert!(!g.diagonals());
    }

    #[test]
    fn degenerate_dimensions_are_clamped() {
        let g = Grid::new(0, -3);
        assert_eq!((g.width(), g.height()), (1, 1));
        assert_eq!(g.source(), g.destination());
        assert_eq!(g.kind(Point::ZERO), Some(CellKind::Source));
    }

    #[test]
    fn node_point_bijection() {
        let g = Grid::new(5, 4);
        for p in g.bounds().iter() {
            let n = g.node(p).unwrap();
            assert_eq!(n.0, (p.y * 5 + p.x) as usize);
            assert_eq!(g.point(n), p);
        }
        assert_eq!(g.node(Point::new(5, 0)), None);
        assert_eq!(g.node(Point::new(0, -1)), None);
        assert_eq!(g.source_node(), g.node(g.source()).unwrap());
        assert_eq!(g.destination_node(), g.node(g.destination()).unwrap());
    }

    // -- editing ------------------------------------------------------------

    #[test]
    fn edits_out_of_bounds_are_ignored() {
        let mut g = Grid::new(3, 3);
        let before = g.clone();
        let out = Point::new(3, 1);
        g.set_obstacle(out);
        g.set_source(out);
        g.set_destination(out);
        g.set_weight(out, 7);
        g.set_empty(out);
        g.mark_visited(out);
        g.mark_path(&[out, Point::new(-1, -1)]);
        assert_eq!(g, before);
    }

    #[test]
    fn endpoints_cannot_be_blocked_or_cleared() {
        let mut g = Grid::new(3, 3);
        g.set_obstacle(g.source());
        g.set_obstacle(g.destination());
        g.set_empty(g.source());
        assert_eq!(g.kind(g.source()), Some(CellKind::Source));
        assert_eq!(g.kind(g.destination()), Some(CellKind::Destination));
    }

    #[test]
    fn moving_source_keeps_exactly_one() {
        let mut g = Grid::new(3, 3);
        g.set_obstacle(Point::new(1, 1));
        g.set_source(Point::new(1, 1));
        assert_eq!(g.source(), Point::new(1, 1));
        assert_eq!(g.kind(Point::new(1, 1)), Some(CellKind::Source));
        assert_eq!(g.kind(Point::new(0, 0)), Some(CellKind::Empty));
        let sources = g.iter().filter(|&(_, k)| k == CellKind::Source).count();
        assert_eq!(sources, 1);
    }

    #[test]
    fn endpoints_cannot_overlap() {
        let mut g = Grid::new(3, 3);
        g.set_source(g.destination());
        assert_eq!(g.source(), Point::new(0, 0));
        g.set_destination(Point::new(0, 0));
        assert_eq!(g.destination(), Point::new(2, 2));
    }

    #[test]
    fn set_weight_clears_obstacle_and_clamps() {
        let mut g = Grid::new(3, 3);
        let p = Point::new(1, 1);
        g.set_obstacle(p);
        g.set_weight(p, 0);
        assert_eq!(g.kind(p), Some(CellKind::Empty));
        assert_eq!(g.weight(p), Some(1));
        g.set_weight(g.source(), 4);
        assert_eq!(g.kind(g.source()), Some(CellKind::Source));
        assert_eq!(g.weight(g.source()), Some(4));
    }

    #[test]
    fn set_empty_resets_weight() {
        let mut g = Grid::new(3, 3);
        let p = Point::new(2, 0);
        g.set_weight(p, 8);
        g.set_empty(p);
        assert_eq!(g.weight(p), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn markers_and_clear_path() {
        let mut g = Grid::new(4, 1);
        g.set_obstacle(Point::new(2, 0));
        g.mark_visited(Point::new(1, 0));
        g.mark_current(Point::new(2, 0));
        g.mark_path(&[Point::new(0, 0), Point::new(1, 0), Point::new(3, 0)]);
        assert_eq!(g.kind(Point::new(0, 0)), Some(CellKind::Source));
        assert_eq!(g.kind(Point::new(1, 0)), Some(CellKind::Path));
        assert_eq!(g.kind(Point::new(2, 0)), Some(CellKind::Obstacle));
        assert_eq!(g.kind(Point::new(3, 0)), Some(CellKind::Destination));

        g.clear_path();
        assert_eq!(g.kind(Point::new(1, 0)), Some(CellKind::Empty));
        assert_eq!(g.kind(Point::new(2, 0)), Some(CellKind::Obstacle));
    }

    // -- graph --------------------------------------------------------------

    #[test]
    fn neighbor_order_orthogonal_then_diagonal() {
        let mut g = Grid::new(3, 3);
        let c = Point::new(1, 1);
        assert_eq!(
            edges(&g, c),
            vec![
                (Point::new(1, 0), 10),
                (Point::new(1, 2), 10),
                (Point::new(0, 1), 10),
                (Point::new(2, 1), 10),
            ]
        );
        g.set_diagonals(true);
        let got: Vec<_> = edges(&g, c).into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            &got[4..],
            &[
                Point::new(0, 0),
                Point::new(2, 0),
                Point::new(0, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges_of_map() {
        let mut g = Grid::new(3, 3);
        g.set_obstacle(Point::new(1, 0));
        assert_eq!(edges(&g, Point::new(0, 0)), vec![(Point::new(0, 1), 10)]);
    }

    #[test]
    fn entry_weight_scales_cost() {
        let mut g = Grid::new(3, 3);
        g.set_diagonals(true);
        g.set_weight(Point::new(1, 1), 5);
        let from_corner = edges(&g, Point::new(0, 0));
        assert!(from_corner.contains(&(Point::new(1, 1), 70)));
        // Leaving a heavy cell is not more expensive.
        let from_center = edges(&g, Point::new(1, 1));
        assert!(from_center.contains(&(Point::new(1, 0), 10)));
        assert!(from_center.contains(&(Point::new(2, 2), 14)));
    }

    #[test]
    fn heuristic_manhattan_and_octile() {
        let mut g = Grid::new(6, 6);
        let a = g.node(Point::new(0, 0)).unwrap();
        let b = g.node(Point::new(5, 2)).unwrap();
        assert_eq!(g.heuristic(a, b), 70);
        g.set_diagonals(true);
        // 10·(5+2) + (14 − 20)·2
        assert_eq!(g.heuristic(a, b), 58);
    }

    #[test]
    fn heuristic_is_consistent_with_diagonals() {
        let g = random_grid(11, 9, 7, true);
        let mut buf = Vec::new();
        for a in g.bounds().iter().filter(|&p| !g.is_obstacle(p)) {
            let an = g.node(a).unwrap();
            buf.clear();
            g.neighbors(an, &mut buf);
            for b in g.bounds().iter() {
                let bn = g.node(b).unwrap();
                for e in &buf {
                    assert!(
                        g.heuristic(an, bn) <= e.weight + g.heuristic(e.target, bn),
                        "h({a},{b}) overestimates via {}",
                        g.point(e.target)
                    );
                }
            }
        }
    }

    // -- searches on grids --------------------------------------------------

    #[test]
    fn open_3x3_orthogonal() {
        let g = Grid::new(3, 3);
        let res = dijkstra(&g, g.source_node(), g.destination_node(), &mut Silent);
        assert!(res.success);
        assert_eq!(res.cost, 40);
        assert_eq!(res.path.len(), 5);
    }

    #[test]
    fn open_3x3_diagonal() {
        let mut g = Grid::new(3, 3);
        g.set_diagonals(true);
        let res = dijkstra(&g, g.source_node(), g.destination_node(), &mut Silent);
        assert!(res.success);
        assert_eq!(res.cost, 28);
        assert_eq!(
            res.path.iter().map(|&n| g.point(n)).collect::<Vec<_>>(),
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
        );
    }

    #[test]
    fn heavy_center_is_routed_around() {
        let mut g = Grid::new(3, 3);
        g.set_weight(Point::new(1, 1), 5);
        for res in [
            dijkstra(&g, g.source_node(), g.destination_node(), &mut Silent),
            astar(&g, g.source_node(), g.destination_node(), &mut Silent),
        ] {
            assert!(res.success);
            assert_eq!(res.cost, 40);
            let center = g.node(Point::new(1, 1)).unwrap();
            assert!(!res.path.contains(&center));
        }
    }

    #[test]
    fn forced_heavy_cell_is_paid_for() {
        // Single corridor through a weight-5 cell.
        let mut g = Grid::new(3, 1);
        g.set_weight(Point::new(1, 0), 5);
        let res = dijkstra(&g, g.source_node(), g.destination_node(), &mut Silent);
        assert_eq!(res.cost, 50 + 10);
    }

    #[test]
    fn huge_weights_saturate() {
        let mut g = Grid::new(3, 1);
        g.set_weight(Point::new(1, 0), 500_000_000);
        assert_eq!(edges(&g, Point::new(0, 0)), vec![(Point::new(1, 0), Cost::MAX)]);
        let (src, dst) = (g.source_node(), g.destination_node());
        assert_eq!(dijkstra(&g, src, dst, &mut Silent).cost, Cost::MAX);
        assert_eq!(astar(&g, src, dst, &mut Silent).cost, Cost::MAX);
        assert_eq!(bfs(&g, src, dst, &mut Silent).cost, 2);

        let g = Grid::parse("1,3,0,0,0,2|S.D|1 4294967295 1").unwrap();
        let res = dijkstra(&g, g.source_node(), g.destination_node(), &mut Silent);
        assert!(res.success);
        assert_eq!(res.cost, Cost::MAX);
    }

    #[test]
    fn saturated_cell_is_still_avoided() {
        // S X .
        // . . D
        let mut g = Grid::new(3, 2);
        g.set_weight(Point::new(1, 0), u32::MAX);
        let res = dijkstra(&g, g.source_node(), g.destination_node(), &mut Silent);
        assert_eq!(res.cost, 30);
        let path: Vec<_> = res.path.iter().map(|&n| g.point(n)).collect();
        assert!(!path.contains(&Point::new(1, 0)));
    }

    #[test]
    fn wall_blocks_every_algorithm() {
        let mut g = Grid::new(5, 5);
        g.set_diagonals(true);
        for y in 0..5 {
            g.set_obstacle(Point::new(2, y));
        }
        let (s, d) = (g.source_node(), g.destination_node());
        for res in [
            bfs(&g, s, d, &mut Silent),
            dijkstra(&g, s, d, &mut Silent),
            astar(&g, s, d, &mut Silent),
        ] {
            assert!(!res.success);
            assert!(res.path.is_empty());
            // Two columns of five cells on the source side.
            assert_eq!(res.visited, 10);
        }
    }

    #[test]
    fn markers_do_not_change_results() {
        let g = random_grid(3, 10, 8, false);
        let mut marked = g.clone();
        for p in g.bounds().iter().step_by(3) {
            marked.mark_visited(p);
        }
        marked.mark_current(Point::new(4, 4));
        let (s, d) = (g.source_node(), g.destination_node());
        assert_eq!(
            dijkstra(&g, s, d, &mut Silent).path,
            dijkstra(&marked, s, d, &mut Silent).path
        );
    }

    #[test]
    fn astar_cost_equals_dijkstra_cost() {
        for seed in 0..40 {
            let g = random_grid(seed, 12, 9, seed % 2 == 0);
            let (s, d) = (g.source_node(), g.destination_node());
            let a = astar(&g, s, d, &mut Silent);
            let dj = dijkstra(&g, s, d, &mut Silent);
            assert_eq!(a.success, dj.success, "seed {seed}");
            assert_eq!(a.cost, dj.cost, "seed {seed}");
            assert!(a.visited <= dj.visited, "seed {seed}");
        }
    }

    #[test]
    fn bfs_matches_unit_weight_dijkstra_hops() {
        for seed in 100..130 {
            let mut g = random_grid(seed, 10, 10, false);
            for p in g.bounds().iter() {
                if g.kind(p) != Some(CellKind::Obstacle) {
                    g.set_weight(p, 1);
                }
            }
            let (s, d) = (g.source_node(), g.destination_node());
            let b = bfs(&g, s, d, &mut Silent);
            let dj = dijkstra(&g, s, d, &mut Silent);
            assert_eq!(b.success, dj.success, "seed {seed}");
            if b.success {
                assert_eq!(b.cost * STRAIGHT_COST, dj.cost, "seed {seed}");
                assert_eq!(b.cost as usize, b.path.len() - 1);
            }
        }
    }

    // -- display ------------------------------------------------------------

    #[test]
    fn display_dump() {
        let mut g = Grid::new(3, 2);
        g.set_obstacle(Point::new(1, 0));
        assert_eq!(g.to_string(), "  0 1 2 \n0 S # . \n1 . . D \n");
    }
}
