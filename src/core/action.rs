//! Action representation: a (row, column) coordinate.
//!
//! An action names the cell the player to move will mark. It carries no
//! mark of its own; the mark is derived from the board it is applied to.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A move: the coordinates of an empty cell.
///
/// ```
/// use ttt_solver::core::Action;
///
/// let center = Action::new(1, 1);
/// assert_eq!(center.index(), 4);
/// assert_eq!(Action::from_index(4), Some(center));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
}

/// Legal actions for a board. Never exceeds 9 entries, so it stays inline.
pub type ActionList = SmallVec<[Action; 9]>;

impl Action {
    /// Create an action for the given cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index (0-8).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Inverse of [`Action::index`]. Returns `None` above 8.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self::new(index / 3, index % 3))
        } else {
            None
        }
    }

    /// Check if this is one of the four corners.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Action::new(0, 0).index(), 0);
        assert_eq!(Action::new(0, 2).index(), 2);
        assert_eq!(Action::new(2, 0).index(), 6);
        assert_eq!(Action::new(2, 2).index(), 8);
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Action::from_index(8), Some(Action::new(2, 2)));
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_corners() {
        let corners: Vec<_> = (0..9)
            .filter_map(Action::from_index)
            .filter(|a| a.is_corner())
            .collect();
        assert_eq!(
            corners,
            vec![
                Action::new(0, 0),
                Action::new(0, 2),
                Action::new(2, 0),
                Action::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Action::from((1, 2)), Action::new(1, 2));
    }

    #[test]
    fn test_serialization() {
        let action = Action::new(2, 1);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
