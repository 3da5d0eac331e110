use crate::cell::Cell;
use crate::solver::GridSolver;

/// Uninformed search: A* with a zero heuristic. Always returns a shortest path and serves as a
/// baseline for the cost of [AstarSolver](crate::solver::astar::AstarSolver) paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Cell, _: &Cell) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::search_context::SearchContext;
    use crate::solver::astar::AstarSolver;

    #[test]
    fn explores_more_than_astar() {
        let grid = Grid::new(15, 15);
        let start = Cell::new(7, 0);
        let goal = Cell::new(7, 14);
        let mut ct = SearchContext::new();
        let path = DijkstraSolver
            .find_path_with_context(&grid, start, goal, &mut ct)
            .unwrap()
            .unwrap();
        let dijkstra_expansions = ct.expanded();
        let astar_path = AstarSolver::new()
            .find_path_with_context(&grid, start, goal, &mut ct)
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), astar_path.len());
        assert_eq!(dijkstra_expansions, 169);
        assert_eq!(ct.expanded(), 15);
    }

    /// Corner to corner every cell of the last row and column ties with the goal on f, so the
    /// heuristic cannot prune anything.
    #[test]
    fn corner_to_corner_expands_everything() {
        let grid = Grid::new(15, 15);
        let start = Cell::new(0, 0);
        let goal = Cell::new(14, 14);
        let mut ct = SearchContext::new();
        DijkstraSolver
            .find_path_with_context(&grid, start, goal, &mut ct)
            .unwrap();
        let dijkstra_expansions = ct.expanded();
        AstarSolver::new()
            .find_path_with_context(&grid, start, goal, &mut ct)
            .unwrap();
        assert_eq!(dijkstra_expansions, grid.len());
        assert!(ct.expanded() <= dijkstra_expansions);
    }
}
