use rand::Rng;

use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;
use crate::{DEFAULT_GRID_SIZE, DEFAULT_OBSTACLE_PROBABILITY};

/// Parameters for [Grid::generate_random]. The default is a 20x20 map searched from the
/// bottom-left to the top-right corner with 30% obstacles.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Cell,
    pub goal: Cell,
    pub obstacle_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        let n = DEFAULT_GRID_SIZE as i32;
        GeneratorConfig {
            rows: DEFAULT_GRID_SIZE,
            cols: DEFAULT_GRID_SIZE,
            start: Cell::new(n - 1, 0),
            goal: Cell::new(0, n - 1),
            obstacle_probability: DEFAULT_OBSTACLE_PROBABILITY,
        }
    }
}

impl GeneratorConfig {
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid> {
        Grid::generate_random(
            self.rows,
            self.cols,
            self.start,
            self.goal,
            self.obstacle_probability,
            rng,
        )
    }
}
