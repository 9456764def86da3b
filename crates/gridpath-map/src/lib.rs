//! A weighted obstacle grid usable as a search graph.
//!
//! [`Grid`] is an H×W lattice of cells. Each cell is passable with a terrain
//! weight ≥ 1, or blocked. It implements [`gridpath_search::Graph`] with
//! 4-way or 8-way movement: a straight step costs 10, a diagonal step 14,
//! and both are multiplied by the weight of the cell being entered.
//!
//! Also here:
//! - a flat single-line text format ([`Grid::serialize`], [`Grid::load`])
//! - random maze generation ([`MazeGen`])
//! - grid-level helpers that run a search and project the result back to
//!   cell coordinates ([`solve`], [`PaintObserver`])

pub mod cell;
pub mod codec;
pub mod grid;
pub mod mapgen;
pub mod solve;

pub use cell::CellKind;
pub use codec::GridError;
pub use grid::{DEFAULT_WEIGHT, DIAGONAL_COST, Grid, STRAIGHT_COST};
pub use mapgen::{DEFAULT_MAZE_DENSITY, MazeConfig, MazeGen};
pub use solve::{PaintObserver, Solution, solve};
