//! Tic-tac-toe rules.
//!
//! Pure functions that interpret a [`crate::core::Board`]:
//! - Turn order and legal actions
//! - How actions produce the next board
//! - Win/draw detection and utility
//!
//! The search engine calls into these at every node but never inspects
//! the grid directly.

pub mod engine;
pub mod reachable;

pub use engine::{
    apply, find_winner, initial_state, is_terminal, legal_actions, outcome, turn_of, utility,
    Outcome, LINES,
};
pub use reachable::reachable_boards;
