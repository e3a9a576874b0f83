//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered (calls to `best_value`).
    pub nodes_visited: u64,

    /// Nodes that were terminal boards.
    pub terminal_nodes: u64,

    /// Nodes abandoned because the opponent already had a better alternative.
    pub cutoffs: u64,

    /// Nodes abandoned because the side to move found a forced win.
    pub early_wins: u64,

    /// Time spent in the last `optimal_action` or `evaluate` call (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of interior nodes that were cut short.
    #[must_use]
    pub fn prune_rate(&self) -> f64 {
        let interior = self.nodes_visited.saturating_sub(self.terminal_nodes);
        if interior == 0 {
            0.0
        } else {
            (self.cutoffs + self.early_wins) as f64 / interior as f64
        }
    }
}
