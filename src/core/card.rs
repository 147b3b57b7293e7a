//! The eight Love Letter card types and the 16-card deck composition.

use serde::{Deserialize, Serialize};

/// A Love Letter card.
///
/// Values run from Guard (1) to Princess (8). The value decides Baron
/// comparisons and end-of-round showdowns; the counts decide how many
/// copies of each card the deck holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Guard,
    Priest,
    Baron,
    Handmaid,
    Prince,
    King,
    Countess,
    Princess,
}

impl Card {
    /// All card types in ascending value order.
    pub const ALL: [Card; 8] = [
        Card::Guard,
        Card::Priest,
        Card::Baron,
        Card::Handmaid,
        Card::Prince,
        Card::King,
        Card::Countess,
        Card::Princess,
    ];

    /// The card's face value (1-8).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Card::Guard => 1,
            Card::Priest => 2,
            Card::Baron => 3,
            Card::Handmaid => 4,
            Card::Prince => 5,
            Card::King => 6,
            Card::Countess => 7,
            Card::Princess => 8,
        }
    }

    /// How many copies of this card the full deck holds.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Card::Guard => 5,
            Card::Priest | Card::Baron | Card::Handmaid | Card::Prince => 2,
            Card::King | Card::Countess | Card::Princess => 1,
        }
    }

    /// Whether playing this card names another player.
    ///
    /// The Prince may also name its own player; the rest may not.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(
            self,
            Card::Guard | Card::Priest | Card::Baron | Card::Prince | Card::King
        )
    }

    /// Whether this card may name its own player as the target.
    #[must_use]
    pub const fn may_target_self(self) -> bool {
        matches!(self, Card::Prince)
    }

    /// Whether holding this card alongside `other` forces the Countess.
    #[must_use]
    pub const fn forces_countess(self) -> bool {
        matches!(self, Card::King | Card::Prince)
    }

    /// The full 16-card deck, unshuffled.
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        let mut deck = Vec::with_capacity(16);
        for card in Card::ALL {
            for _ in 0..card.count() {
                deck.push(card);
            }
        }
        deck
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self, self.value())
    }
}
