//! Uniformly-random baseline agent.

use crate::core::{Action, Card, GameRng};
use crate::game::PlayerView;

use super::Agent;

/// Plays a uniformly-random legal action every turn.
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn on_round_start(&mut self, _view: &PlayerView) {}

    fn on_action_observed(&mut self, _action: &Action, _view: &PlayerView) {}

    fn decide(&mut self, view: &PlayerView, drawn: Card) -> Action {
        view.random_action(drawn, &mut self.rng)
            .unwrap_or_else(|| Action::discard(view.me, drawn))
    }
}
