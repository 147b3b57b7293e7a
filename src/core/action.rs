//! Action representation: a played card plus optional target and guess.
//!
//! Constructors are per card type and enforce the structural rules that do
//! not depend on game state: the Guard may not guess Guard, only the Prince
//! may name its own player, untargeted cards carry no target. Rules that
//! depend on the table (protection, elimination, the forced Countess) are
//! checked by `RoundState` when the action is applied.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::IllegalAction;
use super::player::PlayerId;

/// A complete Love Letter action: `player` plays `card`, optionally naming
/// a `target`, and (for the Guard) a `guess` at the target's hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The acting player.
    pub player: PlayerId,

    /// The card being played.
    pub card: Card,

    /// The named target, if the card takes one and a legal target existed.
    pub target: Option<PlayerId>,

    /// The Guard's guess at the target's card. Never `Card::Guard`.
    pub guess: Option<Card>,
}

impl Action {
    /// Play the Guard, guessing `guess` for `target`'s hand.
    pub fn guard(player: PlayerId, target: PlayerId, guess: Card) -> Result<Self, IllegalAction> {
        if target == player {
            return Err(IllegalAction::SelfTarget { card: Card::Guard });
        }
        if guess == Card::Guard {
            return Err(IllegalAction::GuardGuess);
        }
        Ok(Self {
            player,
            card: Card::Guard,
            target: Some(target),
            guess: Some(guess),
        })
    }

    /// Play the Priest, looking at `target`'s hand.
    pub fn priest(player: PlayerId, target: PlayerId) -> Result<Self, IllegalAction> {
        Self::targeted(player, Card::Priest, target)
    }

    /// Play the Baron, comparing hands with `target`.
    pub fn baron(player: PlayerId, target: PlayerId) -> Result<Self, IllegalAction> {
        Self::targeted(player, Card::Baron, target)
    }

    /// Play the Handmaid, protecting the player until their next turn.
    #[must_use]
    pub fn handmaid(player: PlayerId) -> Self {
        Self::untargeted(player, Card::Handmaid)
    }

    /// Play the Prince, forcing `target` (possibly the player) to discard
    /// and redraw. Any seated target is structurally valid.
    #[must_use]
    pub fn prince(player: PlayerId, target: PlayerId) -> Self {
        Self {
            player,
            card: Card::Prince,
            target: Some(target),
            guess: None,
        }
    }

    /// Play the King, swapping hands with `target`.
    pub fn king(player: PlayerId, target: PlayerId) -> Result<Self, IllegalAction> {
        Self::targeted(player, Card::King, target)
    }

    /// Play the Countess. No effect beyond the discard.
    #[must_use]
    pub fn countess(player: PlayerId) -> Self {
        Self::untargeted(player, Card::Countess)
    }

    /// Play the Princess, eliminating the player.
    #[must_use]
    pub fn princess(player: PlayerId) -> Self {
        Self::untargeted(player, Card::Princess)
    }

    /// Discard a targeted card with no effect.
    ///
    /// Only legal when no legal target exists (everyone else eliminated or
    /// protected); `RoundState::apply` enforces that condition.
    #[must_use]
    pub fn discard(player: PlayerId, card: Card) -> Self {
        Self {
            player,
            card,
            target: None,
            guess: None,
        }
    }

    fn targeted(player: PlayerId, card: Card, target: PlayerId) -> Result<Self, IllegalAction> {
        if target == player {
            return Err(IllegalAction::SelfTarget { card });
        }
        Ok(Self {
            player,
            card,
            target: Some(target),
            guess: None,
        })
    }

    fn untargeted(player: PlayerId, card: Card) -> Self {
        Self {
            player,
            card,
            target: None,
            guess: None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} plays {}", self.player, self.card)?;
        if let Some(target) = self.target {
            write!(f, " on {}", target)?;
        }
        if let Some(guess) = self.guess {
            write!(f, " guessing {}", guess)?;
        }
        Ok(())
    }
}
