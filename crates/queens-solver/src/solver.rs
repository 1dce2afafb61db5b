//! Exhaustive backtracking search over column-by-column queen placement.
//!
//! One board is shared by the whole search. Each column tries rows in
//! ascending order, so solutions come out in lexicographic order of their
//! per-column rows.

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::board::Board;
use crate::error::SolveError;
use crate::solution::Solution;

/// Largest board accepted by default
pub const DEFAULT_MAX_SIDE_LENGTH: usize = 12;

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Side lengths above this are rejected before searching
    pub max_side_length: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_side_length: DEFAULT_MAX_SIDE_LENGTH,
        }
    }
}

/// Result of the solver search
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub side_length: usize,
    /// Every solution, in discovery order
    pub solutions: Vec<Solution>,
    /// Wall-clock time spent in the search
    pub elapsed: Duration,
}

impl SolverResult {
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

fn validate(side_length: usize, config: &SolverConfig) -> Result<(), SolveError> {
    if side_length == 0 {
        return Err(SolveError::InvalidSideLength);
    }
    if side_length > config.max_side_length {
        return Err(SolveError::SideLengthTooLarge {
            side_length,
            max: config.max_side_length,
        });
    }
    Ok(())
}

/// Place a queen in `column` on every row that is not attacked, recursing into
/// the next column after each placement.
///
/// A placement in the last column completes a solution: a snapshot is
/// recorded, the queen is taken back and the remaining rows are still tried.
pub fn search(board: &mut Board, column: usize, solutions: &mut Vec<Solution>) {
    let side_length = board.side_length();
    if column >= side_length {
        return;
    }

    for row in 0..side_length {
        if !board.try_place(column, row) {
            continue;
        }

        if column == side_length - 1 {
            solutions.push(board.snapshot());
            trace!("solution #{} recorded", solutions.len());
        } else {
            search(board, column + 1, solutions);
        }

        board.remove_queen(column, row);
    }
}

/// Find every solution for a board of `side_length * side_length` cells.
pub fn find_solutions(side_length: usize, config: &SolverConfig) -> Result<SolverResult, SolveError> {
    validate(side_length, config)?;

    debug!("searching n queens for n={side_length}");
    let mut board = Board::new(side_length);
    let mut solutions = Vec::new();

    let start_time = Instant::now();
    search(&mut board, 0, &mut solutions);
    let elapsed = start_time.elapsed();

    debug_assert_eq!(board.queen_count(), 0);
    debug!(
        "found {} solutions for n={side_length} in {elapsed:?}",
        solutions.len()
    );

    Ok(SolverResult {
        side_length,
        solutions,
        elapsed,
    })
}

/// Number of solutions for `side_length`, discarding the boards
pub fn count_solutions(side_length: usize, config: &SolverConfig) -> Result<usize, SolveError> {
    find_solutions(side_length, config).map(|result| result.solution_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(result: &SolverResult) -> Vec<Vec<usize>> {
        result
            .solutions
            .iter()
            .map(|s| s.queen_rows().to_vec())
            .collect()
    }

    #[test]
    fn test_known_counts() {
        let config = SolverConfig::default();
        for (n, expected) in [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (7, 40), (8, 92)] {
            assert_eq!(count_solutions(n, &config).unwrap(), expected, "n={n}");
        }
    }

    #[test]
    fn test_four_queens_order() {
        let result = find_solutions(4, &SolverConfig::default()).unwrap();
        assert_eq!(rows(&result), vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn test_single_cell_board() {
        let result = find_solutions(1, &SolverConfig::default()).unwrap();
        assert_eq!(result.solution_count(), 1);
        assert!(result.solutions[0].has_queen(0, 0));
    }

    #[test]
    fn test_search_from_first_column() {
        let mut board = Board::new(5);
        let mut solutions = Vec::new();
        search(&mut board, 0, &mut solutions);
        assert_eq!(solutions.len(), 10);
        assert_eq!(board.queen_count(), 0);
    }

    #[test]
    fn test_search_leaves_board_empty() {
        let mut board = Board::new(6);
        let mut solutions = Vec::new();
        search(&mut board, 0, &mut solutions);
        assert_eq!(board, Board::new(6));
    }

    #[test]
    fn test_zero_side_length_rejected() {
        let err = find_solutions(0, &SolverConfig::default()).unwrap_err();
        assert_eq!(err, SolveError::InvalidSideLength);
    }

    #[test]
    fn test_side_length_above_max_rejected() {
        let config = SolverConfig { max_side_length: 6 };
        let err = find_solutions(7, &config).unwrap_err();
        assert_eq!(
            err,
            SolveError::SideLengthTooLarge {
                side_length: 7,
                max: 6
            }
        );
        assert!(find_solutions(6, &config).is_ok());
    }
}
