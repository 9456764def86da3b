//! Random maze generation.

use rand::{Rng, RngExt};

use crate::cell::CellKind;
use crate::grid::Grid;

/// Share of cells turned into obstacles by default.
pub const DEFAULT_MAZE_DENSITY: f64 = 0.30;

/// Settings for [`MazeGen`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeConfig {
    /// Probability (0.0–1.0) that a cell becomes an obstacle.
    pub density: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_MAZE_DENSITY,
        }
    }
}

/// Scatters obstacles over a [`Grid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default density.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, MazeConfig::default())
    }

    pub fn with_config(rng: R, config: MazeConfig) -> Self {
        Self { rng, config }
    }

    /// Re-roll every cell except the source and destination: each becomes an
    /// obstacle with probability `config.density`, and is cleared otherwise.
    /// Weights are left alone.
    ///
    /// Returns the number of obstacles placed.
    pub fn generate(&mut self, grid: &mut Grid) -> usize {
        let p = if self.config.density.is_nan() {
            0.0
        } else {
            self.config.density.clamp(0.0, 1.0)
        };
        let mut placed = 0;
        for cell in grid.cells.iter_mut().filter(|c| !c.is_endpoint()) {
            *cell = if self.rng.random_bool(p) {
                placed += 1;
                CellKind::Obstacle
            } else {
                CellKind::Empty
            };
        }
        log::debug!(
            "generated maze: {placed} obstacles over {} cells",
            grid.cells.len()
        );
        placed
    }
}
