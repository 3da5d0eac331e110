use core::fmt;
use fxhash::FxHashSet;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::Rng;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::{Error, Result};

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Passability {
    #[default]
    Open,
    Blocked,
}

/// A `rows x cols` map of [Passability] values stored in row-major order.
///
/// In addition to the raw cells, [Grid] maintains the connected components of open cells using a
/// [UnionFind] structure so that reachability can be answered without searching. Opening a cell
/// joins components in place; blocking one may split a component, which marks the components as
/// dirty until [update](Self::update) or [generate_components](Self::generate_components) is
/// called.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Passability>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(0, 0)
    }
}

impl Grid {
    /// Creates a grid with every cell open.
    pub fn new(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid {
            rows,
            cols,
            cells: vec![Passability::Open; rows * cols],
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Fills a `rows x cols` grid with obstacles, blocking every cell except `start` and `goal`
    /// independently with probability `obstacle_probability`. Cells are visited row by row, so a
    /// seeded `rng` always produces the same grid.
    pub fn generate_random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        start: Cell,
        goal: Cell,
        obstacle_probability: f64,
        rng: &mut R,
    ) -> Result<Grid> {
        if !(0.0..=1.0).contains(&obstacle_probability) {
            return Err(Error::InvalidProbability {
                probability: obstacle_probability,
            });
        }
        let mut grid = Grid {
            rows,
            cols,
            cells: vec![Passability::Open; rows * cols],
            components: UnionFind::new(rows * cols),
            components_dirty: true,
        };
        grid.checked_index(&start)?;
        grid.checked_index(&goal)?;
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                let cell = Cell::new(row, col);
                if cell == start || cell == goal {
                    continue;
                }
                if rng.gen_bool(obstacle_probability) {
                    let ix = grid.ix(&cell);
                    grid.cells[ix] = Passability::Blocked;
                }
            }
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn blocked_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&p| p == Passability::Blocked)
            .count()
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    fn ix(&self, cell: &Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// Row-major index of `cell`, or [Error::InvalidCoordinate] if it lies outside the grid.
    pub fn checked_index(&self, cell: &Cell) -> Result<usize> {
        if self.in_bounds(cell) {
            Ok(self.ix(cell))
        } else {
            Err(Error::InvalidCoordinate {
                cell: *cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, cell: &Cell) -> Option<Passability> {
        self.in_bounds(cell).then(|| self.cells[self.ix(cell)])
    }

    pub fn is_blocked(&self, cell: &Cell) -> Result<bool> {
        let ix = self.checked_index(cell)?;
        Ok(self.cells[ix] == Passability::Blocked)
    }

    /// True if `cell` is on the grid and open.
    pub fn can_move_to(&self, cell: &Cell) -> bool {
        self.get(cell) == Some(Passability::Open)
    }

    /// Marks a cell as blocked. Flags the components as dirty since blocking may split one.
    pub fn set_blocked(&mut self, cell: &Cell) -> Result<()> {
        let ix = self.checked_index(cell)?;
        if self.cells[ix] == Passability::Open {
            self.components_dirty = true;
        }
        self.cells[ix] = Passability::Blocked;
        Ok(())
    }

    /// Marks a cell as open, joining it with the components of its open neighbours.
    pub fn set_open(&mut self, cell: &Cell) -> Result<()> {
        let ix = self.checked_index(cell)?;
        self.cells[ix] = Passability::Open;
        for n in self.neighbours(cell) {
            let n_ix = self.ix(&n);
            self.components.union(ix, n_ix);
        }
        Ok(())
    }

    pub fn set(&mut self, cell: &Cell, passability: Passability) -> Result<()> {
        match passability {
            Passability::Open => self.set_open(cell),
            Passability::Blocked => self.set_blocked(cell),
        }
    }

    /// Open orthogonal neighbours of `cell` in the order up, down, left, right.
    pub fn neighbours(&self, cell: &Cell) -> SmallVec<[Cell; 4]> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.can_move_to(n))
            .collect()
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links every open cell to its open neighbours
    /// below and to the right.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.len());
        self.components_dirty = false;
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let cell = Cell::new(row, col);
                if !self.can_move_to(&cell) {
                    continue;
                }
                let ix = self.ix(&cell);
                for n in [Cell::new(row + 1, col), Cell::new(row, col + 1)] {
                    if self.can_move_to(&n) {
                        let n_ix = self.ix(&n);
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }

    /// Retrieves the component id of a cell, if it lies on the grid.
    pub fn component(&self, cell: &Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| self.components.find(self.ix(cell)))
    }

    /// Checks if `start` and `goal` are open cells of the same component. Only meaningful while
    /// the components are not dirty, see [update](Self::update).
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        self.can_move_to(start)
            && self.can_move_to(goal)
            && self.components.equiv(self.ix(start), self.ix(goal))
    }

    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// A printable view of the grid with start, goal and a path marked on it.
    pub fn overlay<'a>(&'a self, start: Cell, goal: Cell, path: &'a [Cell]) -> PathOverlay<'a> {
        PathOverlay {
            grid: self,
            start,
            goal,
            path,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.cells.chunks(self.cols.max(1)) {
            let values = row
                .iter()
                .map(|&p| (p == Passability::Blocked) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

/// Console rendering of a grid: `S` start, `G` goal, `*` path, `#` obstacle, `.` open.
#[derive(Clone, Copy, Debug)]
pub struct PathOverlay<'a> {
    grid: &'a Grid,
    start: Cell,
    goal: Cell,
    path: &'a [Cell],
}

impl fmt::Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let on_path = self.path.iter().collect::<FxHashSet<&Cell>>();
        for row in 0..self.grid.rows as i32 {
            for col in 0..self.grid.cols as i32 {
                let p = Cell::new(row, col);
                let c = if p == self.start {
                    'S'
                } else if p == self.goal {
                    'G'
                } else if on_path.contains(&p) {
                    '*'
                } else if !self.grid.can_move_to(&p) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
