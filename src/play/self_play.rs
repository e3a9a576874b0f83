//! Self-play: both sides follow the alpha-beta searcher to the end.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Board, Result, SIZE};
use crate::rules::initial_state;
use crate::search::{AlphaBeta, SearchConfig};

use super::record::GameRecord;

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Search settings. `search.seed` is the base seed.
    pub search: SearchConfig,

    /// Maximum moves per game. Games cut short have no outcome.
    pub max_moves: usize,

    /// Added to the base seed, together with the game index, for each game.
    pub seed_offset: u64,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            max_moves: SIZE * SIZE,
            seed_offset: 0,
        }
    }
}

impl PlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search settings.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Set maximum moves per game.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Seed used for game number `index`.
    pub fn seed_for(&self, index: usize) -> u64 {
        self.search
            .seed
            .wrapping_add(self.seed_offset)
            .wrapping_add(index as u64)
    }
}

/// Play `search`'s optimal action for whichever side is to move until the game ends.
pub fn play_out(search: &mut AlphaBeta, start: Board) -> Result<GameRecord> {
    play_moves(search, start, SIZE * SIZE)
}

/// Like [`play_out`], but stop after at most `max_moves` moves.
pub fn play_moves(search: &mut AlphaBeta, start: Board, max_moves: usize) -> Result<GameRecord> {
    let mut record = GameRecord::new(start, search.config().seed);

    for _ in 0..max_moves {
        let Some(action) = search.optimal_action(&record.final_board)? else {
            break;
        };
        let mark = record.push(action)?;
        debug!(
            move_number = record.len(),
            %mark,
            %action,
            nodes = search.stats().nodes_visited,
            "self-play move"
        );
    }

    info!(
        moves = record.len(),
        outcome = ?record.outcome(),
        utility = record.utility(),
        seed = record.seed,
        "self-play game finished"
    );
    Ok(record)
}

/// Runs batches of self-play games.
#[derive(Clone, Debug, Default)]
pub struct SelfPlayWorker {
    config: PlayConfig,
}

impl SelfPlayWorker {
    /// Create a new self-play worker.
    pub fn new(config: PlayConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &PlayConfig {
        &self.config
    }

    /// Play one game from `start` with the given seed.
    pub fn play_game(&self, start: Board, seed: u64) -> Result<GameRecord> {
        let mut search = AlphaBeta::new(self.config.search.clone().with_seed(seed));
        play_moves(&mut search, start, self.config.max_moves)
    }

    /// Play `count` games from the empty board, each with its own seed.
    pub fn play_games(&self, count: usize) -> Result<Vec<GameRecord>> {
        (0..count)
            .map(|i| self.play_game(initial_state(), self.config.seed_for(i)))
            .collect()
    }
}
