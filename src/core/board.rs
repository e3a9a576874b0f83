//! The 3x3 board value type.
//!
//! `Board` is a 9-byte `Copy` value. Nothing in the public API mutates a
//! board in place: every transition goes through [`crate::rules::apply`],
//! which returns a fresh board. That makes backtracking during search free
//! of aliasing concerns.
//!
//! The grid is stored as `[[Cell; 3]; 3]`, so a board of any other shape
//! cannot exist. Shape is only checked where untyped input enters:
//! [`Board::from_rows`] and the [`FromStr`] impl.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::error::{Error, Result};
use super::mark::{Cell, Mark};

/// Board side length.
pub const SIZE: usize = 3;

/// A 3x3 tic-tac-toe grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    grid: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from untyped rows.
    ///
    /// Fails with [`Error::InvalidBoard`] if the rows are not 3x3 or if the
    /// mark counts could not arise from legal play (`A` moves first, so
    /// `count(A) - count(B)` must be 0 or 1).
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != SIZE {
            return Err(Error::InvalidBoard(format!(
                "expected {SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut grid = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != SIZE {
                return Err(Error::InvalidBoard(format!(
                    "row {r}: expected {SIZE} cells, got {}",
                    row.len()
                )));
            }
            grid[r].copy_from_slice(row);
        }

        let board = Self { grid };
        board.check_counts()?;
        Ok(board)
    }

    /// Get the cell at the given coordinates.
    ///
    /// Panics if either coordinate is outside 0-2.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// Get the cell an action targets.
    #[must_use]
    pub fn at(&self, action: Action) -> Cell {
        self.get(action.row, action.col)
    }

    /// Copy of this board with one cell replaced.
    #[must_use]
    pub(crate) fn with_cell(mut self, action: Action, cell: Cell) -> Self {
        self.grid[action.row][action.col] = cell;
        self
    }

    /// Iterate over all cells in row-major order, paired with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &cell)| (Action::new(r, c), cell))
        })
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Taken(mark))
            .count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_empty()).count()
    }

    /// Check if every cell is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    fn check_counts(&self) -> Result<()> {
        let a = self.count(Mark::A);
        let b = self.count(Mark::B);
        if a < b || a - b > 1 {
            return Err(Error::InvalidBoard(format!(
                "impossible mark counts: X={a}, O={b} (X moves first)"
            )));
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cell symbols in row-major order.
    ///
    /// Whitespace and the separators `|` and `/` are ignored, so `"XO./.X./..O"`
    /// and a multi-line `Display` rendering both parse.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for c in s.chars() {
            if c.is_whitespace() || c == '|' || c == '/' {
                continue;
            }
            let cell = Cell::from_symbol(c)
                .ok_or_else(|| Error::InvalidBoard(format!("unknown cell symbol {c:?}")))?;
            cells.push(cell);
        }

        if cells.len() != SIZE * SIZE {
            return Err(Error::InvalidBoard(format!(
                "expected {} cells, got {}",
                SIZE * SIZE,
                cells.len()
            )));
        }

        let rows: Vec<&[Cell]> = cells.chunks(SIZE).collect();
        Self::from_rows(&rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}|{}|{}",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Taken(Mark::A);
    const O: Cell = Cell::Taken(Mark::B);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_new_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board, Board::default());
        assert!(!board.is_full());
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(&[[X, O, E], [E, X, E], [E, E, O]]).unwrap();
        assert_eq!(board.get(0, 0), X);
        assert_eq!(board.get(0, 1), O);
        assert_eq!(board.get(2, 2), O);
        assert_eq!(board.count(Mark::A), 2);
        assert_eq!(board.count(Mark::B), 2);
    }

    #[test]
    fn test_from_rows_rejects_bad_shape() {
        let two_rows = vec![vec![E, E, E], vec![E, E, E]];
        assert!(matches!(
            Board::from_rows(&two_rows),
            Err(Error::InvalidBoard(_))
        ));

        let short_row = vec![vec![E, E, E], vec![E, E], vec![E, E, E]];
        assert!(matches!(
            Board::from_rows(&short_row),
            Err(Error::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_from_rows_rejects_bad_counts() {
        // O moved first
        assert!(Board::from_rows(&[[O, E, E], [E, E, E], [E, E, E]]).is_err());
        // X moved twice in a row
        assert!(Board::from_rows(&[[X, X, E], [E, E, E], [E, E, E]]).is_err());
    }

    #[test]
    fn test_parse() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.get(0, 0), X);
        assert_eq!(board.get(1, 1), X);
        assert_eq!(board.get(2, 2), O);
        assert_eq!(board.empty_count(), 5);
    }

    #[test]
    fn test_parse_errors() {
        assert!("XO.".parse::<Board>().is_err());
        assert!("XO./.Z./..O".parse::<Board>().is_err());
        assert!("OOO/XX./...".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "XOX/OX./...".parse().unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered, "X|O|X\nO|X|.\n.|.|.");
        assert_eq!(rendered.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_with_cell_copies() {
        let board = Board::new();
        let next = board.with_cell(Action::new(1, 1), X);
        assert_eq!(board.get(1, 1), E);
        assert_eq!(next.get(1, 1), X);
    }

    #[test]
    fn test_cells_row_major() {
        let coords: Vec<_> = Board::new().cells().map(|(a, _)| a.index()).collect();
        assert_eq!(coords, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_serialization() {
        let board: Board = "X../.O./..X".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
