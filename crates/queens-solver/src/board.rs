//! Mutable search board and the place/remove/attack primitives.
//!
//! The board is a flat buffer of `side_length * side_length` cells indexed by
//! `row * side_length + column`. It is allocated once and mutated in place by
//! the search driver: every successful [`Board::try_place`] is paired with
//! exactly one [`Board::remove_queen`] on the way back up the recursion.

use serde::{Deserialize, Serialize};

use crate::solution::Solution;

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Square board holding the queens placed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side_length: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty board of `side_length * side_length` cells
    pub fn new(side_length: usize) -> Self {
        Self {
            side_length,
            cells: vec![false; side_length * side_length],
        }
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Flat index of the cell at column `x`, row `y`
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.side_length + x
    }

    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.side_length && y < self.side_length
    }

    /// Check whether a queen occupies (x, y). Out-of-bounds cells are empty.
    pub fn has_queen(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.cells[self.index(x, y)]
    }

    /// Number of queens currently on the board
    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Check whether a queen at (x, y) would be attacked by any placed queen.
    ///
    /// Scans outward at distance `1..side_length` along the row, the column and
    /// both diagonals in each horizontal direction. Coordinates that leave the
    /// board are skipped; the first conflict ends the scan.
    pub fn is_attacked(&self, x: usize, y: usize) -> bool {
        for i in 1..self.side_length {
            let right = x.checked_add(i);
            let left = x.checked_sub(i);
            let up = y.checked_sub(i);
            let down = y.checked_add(i);

            for column in [right, left].into_iter().flatten() {
                if self.has_queen(column, y)
                    || up.is_some_and(|row| self.has_queen(column, row))
                    || down.is_some_and(|row| self.has_queen(column, row))
                {
                    return true;
                }
            }

            if up.is_some_and(|row| self.has_queen(x, row))
                || down.is_some_and(|row| self.has_queen(x, row))
            {
                return true;
            }
        }
        false
    }

    /// Place a queen at (x, y) if the cell is on the board, empty and not attacked.
    ///
    /// Returns `false` without touching the board otherwise.
    pub fn try_place(&mut self, x: usize, y: usize) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }

        if self.has_queen(x, y) || self.is_attacked(x, y) {
            return false;
        }

        let index = self.index(x, y);
        self.cells[index] = true;
        true
    }

    /// Clear the cell at (x, y). Fails only for out-of-bounds coordinates.
    pub fn remove_queen(&mut self, x: usize, y: usize) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }

        let index = self.index(x, y);
        self.cells[index] = false;
        true
    }

    /// Independent copy of the current placement
    pub fn snapshot(&self) -> Solution {
        Solution::from_cells(self.side_length, self.cells.clone().into_boxed_slice())
    }
}
