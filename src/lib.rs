//! # grid_astar
//!
//! Shortest paths on a 4-connected grid using the
//! [A* search algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance) to the goal as
//! heuristic. Every orthogonal move costs 1; diagonal moves are not allowed.
//!
//! A [Grid] is a map of open and blocked cells which also tracks
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)), so that
//! reachability can be checked without searching. Searches are run by a [GridSolver]; each
//! search owns its [SearchContext], so any number of searches can share one grid.
//!
//! ```
//! use grid_astar::{find_path, Cell, Grid};
//!
//! let mut grid = Grid::new(3, 3);
//! grid.set_blocked(&Cell::new(1, 1)).unwrap();
//! let path = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap().unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod search_context;
pub mod solver;

use itertools::Itertools;

pub use cell::Cell;
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use grid::{Grid, Passability, PathOverlay};
pub use search_context::{NodeSnapshot, SearchContext, SearchState};
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};

/// Chance of a cell becoming an obstacle in a randomly generated grid.
pub const DEFAULT_OBSTACLE_PROBABILITY: f64 = 0.3;
/// Side length of the grid described by [GeneratorConfig::default].
pub const DEFAULT_GRID_SIZE: usize = 20;

/// Computes a shortest path from `start` to `goal` with a default [AstarSolver].
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Option<Vec<Cell>>> {
    AstarSolver::new().find_path(grid, start, goal)
}

/// Total cost of following `path`, i.e. the sum of the Manhattan distances between consecutive
/// cells. For a path returned by a solver this is its number of moves.
pub fn path_cost(path: &[Cell]) -> i32 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| a.manhattan_distance(b))
        .sum()
}

/// Checks that `path` leads from `start` to `goal` in orthogonal unit steps over open cells.
pub fn is_valid_path(grid: &Grid, path: &[Cell], start: &Cell, goal: &Cell) -> bool {
    path.first() == Some(start)
        && path.last() == Some(goal)
        && path.iter().all(|c| grid.can_move_to(c))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}
