use thiserror::Error;

use crate::cell::Cell;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations and aborted searches. A search that exhausts the grid without
/// reaching the goal is not an error; it returns `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A coordinate lies outside the grid.
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    InvalidCoordinate { cell: Cell, rows: usize, cols: usize },

    /// The start or goal of a search is a blocked cell.
    #[error("endpoint {cell} is blocked")]
    BlockedEndpoint { cell: Cell },

    /// Obstacle probability outside `[0, 1]`.
    #[error("obstacle probability {probability} is not within [0, 1]")]
    InvalidProbability { probability: f64 },

    /// The cancellation flag was raised while searching.
    #[error("search was cancelled")]
    Cancelled,
}
