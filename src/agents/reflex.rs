//! Simple rule-based heuristic agent.
//!
//! Plays the lower-valued of its two cards, honors the forced Countess,
//! never plays the Princess willingly, and picks targets and Guard guesses
//! at random from the legal set.

use crate::core::{Action, Card, GameRng};
use crate::game::PlayerView;

use super::Agent;

/// Rule-based player: discard low, keep high.
pub struct ReflexAgent {
    rng: GameRng,
}

impl ReflexAgent {
    /// Create a reflex agent with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for ReflexAgent {
    fn name(&self) -> &'static str {
        "reflex"
    }

    fn on_round_start(&mut self, _view: &PlayerView) {}

    fn on_action_observed(&mut self, _action: &Action, _view: &PlayerView) {}

    fn decide(&mut self, view: &PlayerView, drawn: Card) -> Action {
        let legal = view.legal_actions(drawn);

        // Keep the higher card. The Princess (8) is never the lower of the
        // two, so she is never played willingly.
        let play = match view.hand {
            Some(hand) if hand.value() <= drawn.value() => hand,
            Some(_) => drawn,
            None => drawn,
        };

        let candidates: Vec<Action> = legal.iter().filter(|a| a.card == play).copied().collect();
        let picked = if candidates.is_empty() {
            // The preferred card is not playable (forced Countess); fall
            // back to whatever is.
            self.rng.choose(&legal).copied()
        } else {
            self.rng.choose(&candidates).copied()
        };
        picked.unwrap_or_else(|| Action::discard(view.me, drawn))
    }
}
