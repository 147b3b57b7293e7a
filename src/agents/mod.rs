//! Swappable game-playing agents.
//!
//! Every player sits behind the same three-operation `Agent` trait, so the
//! game loop can mix search-based, heuristic and random players freely.

pub mod random;
pub mod reflex;

pub use random::RandomAgent;
pub use reflex::ReflexAgent;

use crate::core::{Action, Card};
use crate::game::PlayerView;

/// A Love Letter player.
///
/// The game loop drives agents through exactly these hooks: a fresh view at
/// the start of each round, a refreshed view after every observed action,
/// and one decision per turn. `decide` receives the live post-draw view
/// (`view.current == view.me`, protection cleared, the drawn card already
/// off the deck); the observation hooks exist for agents that track
/// opponents between turns. `decide` is infallible; if an agent returns an
/// illegal action anyway, the game loop substitutes a random legal move.
pub trait Agent {
    /// Short name for logs and scoreboards.
    fn name(&self) -> &'static str;

    /// Called once when a round is dealt, with the agent's view of it.
    fn on_round_start(&mut self, view: &PlayerView);

    /// Called after any player acts, with the agent's refreshed view.
    fn on_action_observed(&mut self, action: &Action, view: &PlayerView);

    /// Choose an action for the turn in `view`, having just drawn `drawn`.
    fn decide(&mut self, view: &PlayerView, drawn: Card) -> Action;
}
