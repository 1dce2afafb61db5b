//! Immutable snapshots of completed boards.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use smallvec::SmallVec;

use crate::board::Position;
use crate::render::render;

/// Row of the queen in each column, inline for boards up to 16 wide
pub type QueenRows = SmallVec<[usize; 16]>;

/// A complete placement copied out of the search board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    side_length: usize,
    cells: Box<[bool]>,
}

impl Solution {
    pub(crate) fn from_cells(side_length: usize, cells: Box<[bool]>) -> Self {
        debug_assert_eq!(cells.len(), side_length * side_length);
        Self { side_length, cells }
    }

    /// Build a solution from the row of the queen in each column.
    ///
    /// Rows outside the board are ignored. The result is not checked; use
    /// [`Solution::is_valid`] for that.
    pub fn from_rows(rows: &[usize]) -> Self {
        let side_length = rows.len();
        let mut cells = vec![false; side_length * side_length];
        for (column, &row) in rows.iter().enumerate() {
            if row < side_length {
                cells[row * side_length + column] = true;
            }
        }
        Self::from_cells(side_length, cells.into_boxed_slice())
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    pub fn has_queen(&self, column: usize, row: usize) -> bool {
        column < self.side_length
            && row < self.side_length
            && self.cells[row * self.side_length + column]
    }

    /// All occupied cells, in column-major order
    pub fn positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for column in 0..self.side_length {
            for row in 0..self.side_length {
                if self.has_queen(column, row) {
                    positions.push(Position::new(column, row));
                }
            }
        }
        positions
    }

    /// Row of the queen in each column, read left to right.
    ///
    /// Columns without a queen are skipped, so the length equals the side
    /// length only for complete placements.
    pub fn queen_rows(&self) -> QueenRows {
        (0..self.side_length)
            .filter_map(|column| (0..self.side_length).find(|&row| self.has_queen(column, row)))
            .collect()
    }

    /// Re-check the placement without relying on the search board: exactly one
    /// queen per column and per row, and no two queens on a diagonal.
    pub fn is_valid(&self) -> bool {
        let positions = self.positions();
        if positions.len() != self.side_length {
            return false;
        }

        let mut columns = vec![false; self.side_length];
        let mut rows = vec![false; self.side_length];
        for p in &positions {
            if columns[p.column] || rows[p.row] {
                return false;
            }
            columns[p.column] = true;
            rows[p.row] = true;
        }

        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                if a.column.abs_diff(b.column) == a.row.abs_diff(b.row) {
                    return false;
                }
            }
        }

        true
    }
}

impl Serialize for Solution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Solution", 2)?;
        state.serialize_field("sideLength", &self.side_length)?;
        state.serialize_field("queens", &self.queen_rows())?;
        state.end()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_round_trips_through_queen_rows() {
        let solution = Solution::from_rows(&[1, 3, 0, 2]);
        assert_eq!(solution.side_length(), 4);
        assert_eq!(solution.queen_rows().as_slice(), &[1, 3, 0, 2]);
        assert!(solution.has_queen(0, 1));
        assert!(!solution.has_queen(0, 0));
    }

    #[test]
    fn test_is_valid_accepts_known_solution() {
        assert!(Solution::from_rows(&[1, 3, 0, 2]).is_valid());
        assert!(Solution::from_rows(&[0]).is_valid());
    }

    #[test]
    fn test_is_valid_rejects_shared_row() {
        assert!(!Solution::from_rows(&[1, 3, 1, 2]).is_valid());
    }

    #[test]
    fn test_is_valid_rejects_shared_diagonal() {
        assert!(!Solution::from_rows(&[0, 1, 2, 3]).is_valid());
        assert!(!Solution::from_rows(&[3, 1, 0, 2]).is_valid());
    }

    #[test]
    fn test_is_valid_rejects_incomplete_placement() {
        let solution = Solution::from_rows(&[1, 3, 0, 9]);
        assert_eq!(solution.queen_rows().len(), 3);
        assert!(!solution.is_valid());
    }

    #[test]
    fn test_positions_are_column_major() {
        let positions = Solution::from_rows(&[2, 0, 3, 1]).positions();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(2, 3),
                Position::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(Solution::from_rows(&[1, 3, 0, 2])).unwrap();
        assert_eq!(json["sideLength"], 4);
        assert_eq!(json["queens"], serde_json::json!([1, 3, 0, 2]));
    }
}
