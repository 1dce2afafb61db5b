//! N-Queens solver library.
//!
//! Enumerates every placement of N queens on an N×N board such that no two
//! queens share a row, column or diagonal, using a depth-first backtracking
//! search over a single mutable board.

pub mod board;
pub mod error;
pub mod render;
pub mod solution;
pub mod solver;

// Re-export main types
pub use board::{Board, Position};
pub use error::SolveError;
pub use render::render;
pub use solution::{QueenRows, Solution};
pub use solver::{
    count_solutions, find_solutions, search, SolverConfig, SolverResult, DEFAULT_MAX_SIDE_LENGTH,
};
