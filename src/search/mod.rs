//! Adversarial search for tic-tac-toe.
//!
//! ## Overview
//!
//! Full-depth minimax with alpha-beta pruning. The game tree is small
//! (depth at most 9), so every search runs to the leaves; there is no
//! depth limit, heuristic evaluation, or transposition table.
//!
//! - **Fail-hard pruning**: a node returns the caller's bound as soon as a
//!   child passes it
//! - **Win short-circuit**: a node stops on the first move that wins for
//!   the side to move
//! - **Shuffled move order**: legal actions are shuffled per node with a
//!   seeded RNG, so ties between optimal moves break differently per seed
//!
//! ## Usage
//!
//! ```rust
//! use ttt_solver::core::{Action, Board};
//! use ttt_solver::search::{AlphaBeta, SearchConfig};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let mut search = AlphaBeta::new(SearchConfig::default().with_seed(7));
//!
//! assert_eq!(search.optimal_action(&board).unwrap(), Some(Action::new(0, 2)));
//! assert_eq!(search.evaluate(&board).unwrap(), 1);
//! ```

pub mod alpha_beta;
pub mod config;
pub mod stats;

pub use alpha_beta::{best_value, optimal_action, AlphaBeta};
pub use config::SearchConfig;
pub use stats::SearchStats;
