use std::sync::atomic::AtomicBool;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::search_context::SearchContext;
use log::info;

pub mod astar;
pub mod dijkstra;

/// Checks that both endpoints lie on the grid and are open. Bounds are checked for both
/// endpoints before either is checked for obstacles.
pub fn validate_endpoints(grid: &Grid, start: &Cell, goal: &Cell) -> Result<()> {
    grid.checked_index(start)?;
    grid.checked_index(goal)?;
    for cell in [start, goal] {
        if !grid.can_move_to(cell) {
            return Err(Error::BlockedEndpoint { cell: *cell });
        }
    }
    Ok(())
}

/// A best-first search over the open cells of a [Grid] with unit orthogonal moves. Implementors
/// only choose the heuristic; the search itself is run by a [SearchContext].
pub trait GridSolver {
    /// Estimated remaining cost from `cell` to `goal`.
    fn heuristic(&self, cell: &Cell, goal: &Cell) -> f64;

    /// Computes a path from `start` to `goal`, both included. Returns `Ok(None)` if the goal
    /// cannot be reached and an error if either endpoint is outside the grid or blocked.
    fn find_path(&self, grid: &Grid, start: Cell, goal: Cell) -> Result<Option<Vec<Cell>>> {
        let mut ct = SearchContext::new();
        self.find_path_with_context(grid, start, goal, &mut ct)
    }

    /// Like [find_path](Self::find_path) but reuses the allocations of `ct`, which afterwards
    /// holds the nodes of this search. `ct` is reset even if the endpoints are rejected.
    fn find_path_with_context(
        &self,
        grid: &Grid,
        start: Cell,
        goal: Cell,
        ct: &mut SearchContext,
    ) -> Result<Option<Vec<Cell>>> {
        ct.reset();
        validate_endpoints(grid, &start, &goal)?;
        ct.astar(grid, start, goal, |cell| self.heuristic(cell, &goal), None)
    }

    /// Like [find_path](Self::find_path), but gives up with [Error::Cancelled] once `cancel` is
    /// set.
    fn find_path_cancellable(
        &self,
        grid: &Grid,
        start: Cell,
        goal: Cell,
        cancel: &AtomicBool,
    ) -> Result<Option<Vec<Cell>>> {
        validate_endpoints(grid, &start, &goal)?;
        let mut ct = SearchContext::new();
        ct.astar(
            grid,
            start,
            goal,
            |cell| self.heuristic(cell, &goal),
            Some(cancel),
        )
    }

    /// Checks the connected components before searching and skips the search if they show the
    /// goal cannot be reached. The components of `grid` must be up to date.
    fn find_path_checked(
        &self,
        grid: &Grid,
        start: Cell,
        goal: Cell,
    ) -> Result<Option<Vec<Cell>>> {
        validate_endpoints(grid, &start, &goal)?;
        if grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        self.find_path(grid, start, goal)
    }
}
