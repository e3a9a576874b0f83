//! Tic-tac-toe rules as pure functions over [`Board`].
//!
//! - Whose turn it is
//! - What actions are legal
//! - How an action produces the next board
//! - Win/draw conditions and utility

use tracing::trace;

use crate::core::{Action, ActionList, Board, Cell, Error, Mark, Result};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Single winner.
    Winner(Mark),
    /// Full board with no completed line.
    Draw,
}

impl Outcome {
    /// Check if a mark won.
    #[must_use]
    pub fn is_winner(self, mark: Mark) -> bool {
        self == Outcome::Winner(mark)
    }

    /// Utility from `Mark::A`'s perspective: +1, -1, or 0.
    #[must_use]
    pub fn utility(self) -> i8 {
        match self {
            Outcome::Winner(mark) => mark.win_utility(),
            Outcome::Draw => 0,
        }
    }
}

/// Every line that wins, in scan order: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [[Action; 3]; 8] = [
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// The starting position: an empty grid.
#[must_use]
pub fn initial_state() -> Board {
    Board::new()
}

/// The mark to move: `A` if both sides have placed the same number of marks, else `B`.
#[must_use]
pub fn turn_of(board: &Board) -> Mark {
    if board.count(Mark::A) == board.count(Mark::B) {
        Mark::A
    } else {
        Mark::B
    }
}

/// Every empty cell in row-major order, or `None` once the game is over.
#[must_use]
pub fn legal_actions(board: &Board) -> Option<ActionList> {
    if is_terminal(board) {
        return None;
    }

    Some(
        board
            .cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(action, _)| action)
            .collect(),
    )
}

/// The board after the player to move marks `action`.
///
/// Fails with [`Error::InvalidAction`] if the cell is taken; `board` itself
/// is never modified. Coordinates outside 0-2 panic.
pub fn apply(board: &Board, action: Action) -> Result<Board> {
    if !board.at(action).is_empty() {
        trace!(%action, "rejected move onto occupied cell");
        return Err(Error::InvalidAction {
            row: action.row,
            col: action.col,
        });
    }

    Ok(board.with_cell(action, Cell::Taken(turn_of(board))))
}

/// The mark holding the first complete line in [`LINES`] order, if any.
#[must_use]
pub fn find_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.at(a).mark()?;
        (board.at(b) == Cell::Taken(mark) && board.at(c) == Cell::Taken(mark)).then_some(mark)
    })
}

/// True once someone has won or the grid is full.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    find_winner(board).is_some() || board.is_full()
}

/// +1 if `A` has won, -1 if `B` has won, 0 otherwise.
///
/// Non-terminal boards also yield 0. Use [`outcome`] to tell a draw from an
/// unfinished game.
#[must_use]
pub fn utility(board: &Board) -> i8 {
    find_winner(board).map_or(0, Mark::win_utility)
}

/// The result of a finished game, or `None` if play continues.
#[must_use]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match find_winner(board) {
        Some(mark) => Some(Outcome::Winner(mark)),
        None if board.is_full() => Some(Outcome::Draw),
        None => None,
    }
}
