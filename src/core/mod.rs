//! Core value types: marks, cells, actions, the board, RNG, errors.
//!
//! Everything here is a plain value. Game rules that interpret a board
//! (turn order, legality, winners) live in [`crate::rules`].

pub mod action;
pub mod board;
pub mod error;
pub mod mark;
pub mod rng;

pub use action::{Action, ActionList};
pub use board::{Board, SIZE};
pub use error::{Error, Result};
pub use mark::{Cell, Mark};
pub use rng::{GameRng, GameRngState};
