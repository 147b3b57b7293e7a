//! The search-backed agent.

use crate::agents::Agent;
use crate::core::{Action, Card};
use crate::game::PlayerView;

use super::config::MCTSConfig;
use super::search::MCTSSearch;
use super::stats::SearchStats;

/// An agent that decides by determinized Monte Carlo tree search.
///
/// Runs a fresh search over the live view delivered with each decision;
/// the between-turn observation hooks carry nothing the next search cannot
/// reconstruct from that view, so they are ignored.
#[derive(Debug)]
pub struct MCTSAgent {
    search: MCTSSearch,
}

impl MCTSAgent {
    /// Create an agent with the given search configuration.
    #[must_use]
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            search: MCTSSearch::new(config),
        }
    }

    /// Statistics from the agent's most recent decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Default for MCTSAgent {
    fn default() -> Self {
        Self::new(MCTSConfig::default())
    }
}

impl Agent for MCTSAgent {
    fn name(&self) -> &'static str {
        "mcts"
    }

    fn on_round_start(&mut self, _view: &PlayerView) {}

    fn on_action_observed(&mut self, _action: &Action, _view: &PlayerView) {}

    fn decide(&mut self, view: &PlayerView, drawn: Card) -> Action {
        self.search.search(view, drawn)
    }
}
