use crate::cell::Cell;
use crate::solver::GridSolver;

/// A* with the straight-line distance to the goal as heuristic. Since a 4-connected path is never
/// shorter than the Euclidean distance, the heuristic is admissible and found paths are shortest.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. Values above 1.0 give Weighted A*, which expands fewer nodes but may
    /// return longer paths.
    pub heuristic_factor: f64,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl GridSolver for AstarSolver {
    /// Euclidean distance times the heuristic factor.
    fn heuristic(&self, cell: &Cell, goal: &Cell) -> f64 {
        cell.euclidean_distance(goal) * self.heuristic_factor
    }
}
