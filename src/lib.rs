//! # ttt-solver
//!
//! Tic-tac-toe board model and optimal-play search.
//!
//! ## Design Principles
//!
//! 1. **Boards Are Values**: `Board` is a 9-byte `Copy` type. Applying an
//!    action returns a new board; nothing is mutated during search.
//!
//! 2. **Derived, Not Stored**: Whose turn it is, legal actions, and the
//!    winner are all computed from the grid.
//!
//! 3. **Seeded Variety**: The search shuffles move order with a seeded RNG,
//!    so ties between optimal moves break differently per seed while
//!    staying reproducible.
//!
//! ## Modules
//!
//! - `core`: Marks, cells, actions, the board, RNG, errors
//! - `rules`: Turn order, legal actions, transitions, winners, utility
//! - `search`: Minimax with alpha-beta pruning
//! - `play`: Self-play driver and game records
//!
//! ## Example
//!
//! ```
//! use ttt_solver::{apply, initial_state, is_terminal, optimal_action, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = optimal_action(&board).unwrap() {
//!     board = apply(&board, action).unwrap();
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! ```

pub mod core;
pub mod play;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Action, ActionList, Board, Cell, Error, GameRng, GameRngState, Mark, Result};

pub use crate::rules::{
    apply, find_winner, initial_state, is_terminal, legal_actions, outcome, reachable_boards,
    turn_of, utility, Outcome,
};

pub use crate::search::{best_value, optimal_action, AlphaBeta, SearchConfig, SearchStats};

pub use crate::play::{play_moves, play_out, GameRecord, Move, PlayConfig, SelfPlayWorker};
