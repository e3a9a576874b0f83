//! Record of a played-out game.
//!
//! A record captures:
//! - The board play started from
//! - Every move, with the mark that made it
//! - The final board, from which the outcome is read

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, Mark, Result};
use crate::rules::{apply, outcome, turn_of, utility, Outcome};

/// A single move in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The mark that moved.
    pub mark: Mark,

    /// Where it moved.
    pub action: Action,
}

/// A complete game from some starting board to a terminal board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board play started from.
    pub start: Board,

    /// Moves in the order they were played.
    pub moves: Vec<Move>,

    /// Board after the last move.
    pub final_board: Board,

    /// Seed of the searcher that played the game.
    pub seed: u64,
}

impl GameRecord {
    /// Create an empty record starting at `start`.
    pub fn new(start: Board, seed: u64) -> Self {
        Self {
            start,
            moves: Vec::new(),
            final_board: start,
            seed,
        }
    }

    /// Play `action` for the side to move and record it.
    ///
    /// Returns the mark that moved. On error the record is unchanged.
    pub fn push(&mut self, action: Action) -> Result<Mark> {
        let mark = turn_of(&self.final_board);
        self.final_board = apply(&self.final_board, action)?;
        self.moves.push(Move { mark, action });
        Ok(mark)
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no moves were played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Outcome of the game, or `None` if it stopped before a terminal board.
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(&self.final_board)
    }

    /// Utility of the final board from `Mark::A`'s perspective.
    pub fn utility(&self) -> i8 {
        utility(&self.final_board)
    }

    /// Every board in the game, from `start` to `final_board` inclusive.
    pub fn boards(&self) -> Result<Vec<Board>> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.start;
        boards.push(board);
        for m in &self.moves {
            board = apply(&board, m.action)?;
            boards.push(board);
        }
        Ok(boards)
    }
}
