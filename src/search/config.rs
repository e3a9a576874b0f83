//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Random seed for action shuffling.
    /// Same seed produces identical move choices.
    pub seed: u64,

    /// Shuffle legal actions at every node.
    /// Varies the chosen move among equally good ones; does not change values.
    /// When off, actions are tried in row-major order.
    pub shuffle_actions: bool,

    /// Pick the first move on an empty board without searching.
    /// Every opening is a draw under perfect play, so the search is redundant.
    pub opening_shortcut: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            shuffle_actions: true,
            opening_shortcut: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable action shuffling.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle_actions = shuffle;
        self
    }

    /// Enable or disable the empty-board shortcut.
    pub fn with_opening_shortcut(mut self, enabled: bool) -> Self {
        self.opening_shortcut = enabled;
        self
    }
}
