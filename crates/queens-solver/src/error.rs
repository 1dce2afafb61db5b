//! Errors raised at the solver entry point.

use thiserror::Error;

/// Reasons a board size is refused before any search runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("side length must be at least 1")]
    InvalidSideLength,
    #[error("side length {side_length} exceeds the configured maximum of {max}")]
    SideLengthTooLarge { side_length: usize, max: usize },
}
