//! Enumeration of every board reachable by legal play.

use rustc_hash::FxHashSet;

use crate::core::{Board, Cell};

use super::engine::{initial_state, is_terminal, turn_of};

/// Every board reachable from [`initial_state`], terminal boards included.
///
/// There are 5,478 of them, 958 of which end the game.
#[must_use]
pub fn reachable_boards() -> FxHashSet<Board> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![initial_state()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) || is_terminal(&board) {
            continue;
        }
        let mark = Cell::Taken(turn_of(&board));
        for (action, cell) in board.cells() {
            if !cell.is_empty() {
                continue;
            }
            let next = board.with_cell(action, mark);
            if !seen.contains(&next) {
                stack.push(next);
            }
        }
    }

    seen
}
