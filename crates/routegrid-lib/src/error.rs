use thiserror::Error;

use crate::grid::Cell;

/// Convenient result alias for the routegrid library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a cell coordinate lies outside the grid dimensions.
    #[error("cell ({}, {}) is outside the {rows}x{cols} grid", .cell.row, .cell.col)]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    /// Raised when no route could be found between two cells.
    #[error("no route found between ({}, {}) and ({}, {})", .start.row, .start.col, .goal.row, .goal.col)]
    RouteNotFound { start: Cell, goal: Cell },

    /// Raised when a computed route plan lacks any cells.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
