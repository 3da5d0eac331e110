use core::fmt;
use smallvec::SmallVec;

/// Row and column offsets of the 4-neighbourhood, in expansion order: up, down, left, right.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A (row, column) coordinate on a [Grid](crate::grid::Grid). Coordinates are signed so that
/// stepping off the border yields a value which [in_bounds](crate::grid::Grid::in_bounds) rejects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The four orthogonal neighbours, possibly out of bounds.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Cell; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|&(dr, dc)| Cell::new(self.row + dr, self.col + dc))
            .collect()
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Straight-line distance, used as the A* heuristic.
    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let dr = (self.row - other.row) as f64;
        let dc = (self.col - other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// True if `other` differs by exactly one unit along exactly one axis.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
