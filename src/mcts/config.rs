//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// UCB1 exploration constant (default: 1.41, empirically ~sqrt(2)).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Wall-clock budget per decision, in milliseconds.
    /// The search loop checks the deadline at the top of every iteration.
    pub time_budget_ms: u64,

    /// Reward added to a node's score when a rollout's winner matches the
    /// node's player to move.
    pub win_score: f64,

    /// Hard cap on search iterations (0 = unlimited). The wall-clock budget
    /// still applies; with a cap and a generous budget, searches become
    /// reproducible for a given seed.
    pub max_iterations: u32,

    /// Random seed for determinization and rollout RNG.
    /// Same seed and same observations produce deterministic searches.
    pub seed: u64,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 1.41,
            time_budget_ms: 300,
            win_score: 10.0,
            max_iterations: 0,
            seed: 42,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with a custom exploration constant.
    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with a custom time budget.
    #[must_use]
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    /// Create a new config with an iteration cap (0 = unlimited).
    #[must_use]
    pub fn with_max_iterations(mut self, cap: u32) -> Self {
        self.max_iterations = cap;
        self
    }

    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the budget from a difficulty level: 60ms at level 1, +120ms per
    /// level after that (level 3 is the 300ms default).
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        let level = level.max(1) as u64;
        self.time_budget_ms = 60 * (2 * (level - 1) + 1);
        self
    }
}
