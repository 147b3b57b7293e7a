//! Error taxonomy for illegal action construction and application.

use thiserror::Error;

use super::card::Card;
use super::player::PlayerId;

/// Why an action could not be built or applied.
///
/// Structural constraints (self-targeting, guessing Guard) are enforced by
/// the `Action` constructors; state-dependent constraints (protection,
/// elimination, the forced Countess) by `RoundState::apply`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("{card} may not target its own player")]
    SelfTarget { card: Card },

    #[error("the Guard may not guess Guard")]
    GuardGuess,

    #[error("{target} has been eliminated")]
    TargetEliminated { target: PlayerId },

    #[error("{target} is protected by the Handmaid")]
    TargetProtected { target: PlayerId },

    #[error("the Countess must be played when held with the King or Prince")]
    CountessForced,

    #[error("{player} does not hold {card}")]
    CardNotHeld { player: PlayerId, card: Card },

    #[error("it is not {player}'s turn")]
    OutOfTurn { player: PlayerId },

    #[error("a legal target exists, so {card} may not be discarded idle")]
    DiscardWithTarget { card: Card },

    #[error("the round is already over")]
    RoundOver,
}
