//! Player marks and board cells.
//!
//! ## Mark
//!
//! Two-valued player identifier. `Mark::A` always moves first and is the
//! maximizing side; `Mark::B` is the minimizing side.
//!
//! ## Cell
//!
//! Contents of a single square: empty or taken by a mark.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First player (displayed as `X`). Maximizes utility.
    A,
    /// Second player (displayed as `O`). Minimizes utility.
    B,
}

impl Mark {
    /// Get the other player's mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::A => Mark::B,
            Mark::B => Mark::A,
        }
    }

    /// Utility of a win for this mark, from `Mark::A`'s perspective.
    #[must_use]
    pub const fn win_utility(self) -> i8 {
        match self {
            Mark::A => 1,
            Mark::B => -1,
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::A => 'X',
            Mark::B => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single square on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Mark),
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark occupying this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(mark) => Some(mark),
        }
    }

    /// Display symbol (`.` for empty).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Taken(mark) => mark.symbol(),
        }
    }

    /// Parse a cell from its display symbol.
    ///
    /// Accepts `X`/`x`, `O`/`o`, and `.`, `-`, `_` for empty.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::Taken(Mark::A)),
            'O' | 'o' => Some(Cell::Taken(Mark::B)),
            '.' | '-' | '_' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Taken(mark)
    }
}
