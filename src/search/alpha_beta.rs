//! Minimax search with alpha-beta pruning.
//!
//! Values are from `Mark::A`'s perspective: `A` maximizes, `B` minimizes.
//! Each node receives a single `bound`: the best value the opponent can
//! already guarantee one level up. Once a child's value passes that bound,
//! the opponent will never let play reach this node, so the node returns
//! the bound and stops (fail-hard).
//!
//! A node also stops as soon as the side to move finds its own win, since
//! no other move can do better.

use std::time::Instant;

use tracing::{debug, instrument, trace};

use crate::core::{Action, ActionList, Board, GameRng, GameRngState, Mark, Result};
use crate::rules::{apply, legal_actions, turn_of, utility};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Worst possible starting value for `mark`: below every real utility for
/// the maximizer, above every real utility for the minimizer.
const fn worst_for(mark: Mark) -> i8 {
    match mark {
        Mark::A => i8::MIN,
        Mark::B => i8::MAX,
    }
}

/// Does `mark` strictly prefer value `a` over value `b`?
const fn prefers(mark: Mark, a: i8, b: i8) -> bool {
    match mark {
        Mark::A => a > b,
        Mark::B => a < b,
    }
}

/// Alpha-beta searcher.
///
/// Owns its configuration, shuffle RNG, and statistics. Searchers share
/// nothing, so separate instances can run on separate threads.
#[derive(Clone, Debug)]
pub struct AlphaBeta {
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl AlphaBeta {
    /// Create a searcher from a configuration.
    pub fn new(config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Create a searcher with default settings and a random seed.
    pub fn from_entropy() -> Self {
        Self::new(SearchConfig::default().with_seed(rand::random()))
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics for the last `optimal_action` or `evaluate` call.
    ///
    /// Direct `best_value` calls add to the counters without resetting them
    /// and leave `time_us` alone.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Snapshot the shuffle RNG so a later search can be replayed.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore a shuffle RNG snapshot taken with [`AlphaBeta::rng_state`].
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Legal actions in search order, or `None` on a terminal board.
    fn ordered_actions(&mut self, board: &Board) -> Option<ActionList> {
        let mut actions = legal_actions(board)?;
        if self.config.shuffle_actions {
            self.rng.shuffle(&mut actions);
        }
        Some(actions)
    }

    /// Minimax value of `board` for the side to move, cut off at `bound`.
    ///
    /// `bound` is the value the opponent can already guarantee elsewhere.
    /// The result is exact whenever the true value does not pass `bound`;
    /// otherwise `bound` itself is returned. Pass `i8::MAX` (for `A` to
    /// move) or `i8::MIN` (for `B`) to get the exact value.
    pub fn best_value(&mut self, board: &Board, bound: i8) -> Result<i8> {
        self.stats.nodes_visited += 1;

        let Some(actions) = self.ordered_actions(board) else {
            self.stats.terminal_nodes += 1;
            return Ok(utility(board));
        };

        let mover = turn_of(board);
        let mut best = worst_for(mover);

        for action in actions {
            let child = apply(board, action)?;
            let value = self.best_value(&child, best)?;

            if value == mover.win_utility() {
                self.stats.early_wins += 1;
                trace!(%mover, %action, "early win");
                return Ok(value);
            }

            if prefers(mover, value, bound) {
                self.stats.cutoffs += 1;
                trace!(%mover, %action, value, bound, "cutoff");
                return Ok(bound);
            }

            if prefers(mover, value, best) {
                best = value;
            }
        }

        Ok(best)
    }

    /// Exact minimax value of `board`.
    pub fn evaluate(&mut self, board: &Board) -> Result<i8> {
        let start = Instant::now();
        self.stats.reset();
        let mover = turn_of(board);
        let value = self.best_value(board, worst_for(mover.opponent()))?;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(value)
    }

    /// An optimal action for the side to move, or `None` on a terminal board.
    ///
    /// Among equally good actions the first one found wins; with shuffling
    /// enabled that makes the choice vary from call to call.
    #[instrument(level = "debug", skip_all, fields(to_move = %turn_of(board)))]
    pub fn optimal_action(&mut self, board: &Board) -> Result<Option<Action>> {
        let start = Instant::now();
        self.stats.reset();

        let Some(actions) = self.ordered_actions(board) else {
            return Ok(None);
        };

        if self.config.opening_shortcut && actions.len() == 9 {
            let action = actions[0];
            debug!(%action, "opening move chosen without search");
            return Ok(Some(action));
        }

        let mover = turn_of(board);
        let mut best_value = worst_for(mover);
        let mut best_action = None;

        for action in actions {
            let child = apply(board, action)?;
            let value = self.best_value(&child, best_value)?;

            if value == mover.win_utility() {
                self.stats.early_wins += 1;
                trace!(%mover, %action, "early win");
                best_value = value;
                best_action = Some(action);
                break;
            }

            if prefers(mover, value, best_value) {
                best_value = value;
                best_action = Some(action);
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            action = ?best_action,
            value = best_value,
            nodes = self.stats.nodes_visited,
            cutoffs = self.stats.cutoffs,
            "optimal action selected"
        );

        Ok(best_action)
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// An optimal action for the side to move, using a freshly seeded searcher.
///
/// Repeated calls vary among equally optimal actions.
pub fn optimal_action(board: &Board) -> Result<Option<Action>> {
    AlphaBeta::from_entropy().optimal_action(board)
}

/// [`AlphaBeta::best_value`] with a freshly seeded searcher.
pub fn best_value(board: &Board, bound: i8) -> Result<i8> {
    AlphaBeta::from_entropy().best_value(board, bound)
}
