//! Self-play driver.
//!
//! Plays games where both sides follow the alpha-beta searcher, recording
//! every move. Nothing is stored; records are returned to the caller.
//!
//! ## Overview
//!
//! - **GameRecord**: start board, moves, final board, and outcome
//! - **play_out**: play one game with a given searcher
//! - **play_moves**: the same, capped at a number of moves
//! - **SelfPlayWorker**: play batches of seeded games
//!
//! ```rust
//! use ttt_solver::play::{play_out, SelfPlayWorker, PlayConfig};
//! use ttt_solver::rules::initial_state;
//! use ttt_solver::search::AlphaBeta;
//!
//! let record = play_out(&mut AlphaBeta::default(), initial_state()).unwrap();
//! assert_eq!(record.utility(), 0);
//!
//! let games = SelfPlayWorker::new(PlayConfig::new()).play_games(2).unwrap();
//! assert!(games.iter().all(|g| g.utility() == 0));
//! ```

pub mod record;
pub mod self_play;

pub use record::{GameRecord, Move};
pub use self_play::{play_moves, play_out, PlayConfig, SelfPlayWorker};
