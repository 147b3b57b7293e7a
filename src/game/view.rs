//! A player's observable slice of a round.
//!
//! `PlayerView` holds only information legitimately visible to one player:
//! their own hand, the public table (discards, eliminations, protection,
//! deck count) and any opponent cards revealed to them by a Priest, a Baron
//! tie or a King swap. Agents decide from a view; the search determinizes
//! one into a full `RoundState`.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Card, GameRng, PlayerId, PlayerMap};

use super::legal::legal_actions;
use super::round::DiscardPile;

/// One player's observation of a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    /// The observing player.
    pub me: PlayerId,

    /// The observer's own hand card; `None` once eliminated.
    pub hand: Option<Card>,

    /// The player to move.
    pub current: PlayerId,

    /// Cards left in the drawable deck.
    pub deck_remaining: usize,

    /// Whether the set-aside reserve card is still unclaimed.
    pub reserve_present: bool,

    /// Face-up discard piles (public).
    pub discards: PlayerMap<DiscardPile>,

    /// Elimination flags (public).
    pub eliminated: PlayerMap<bool>,

    /// Handmaid protection flags (public).
    pub protected: PlayerMap<bool>,

    /// Hand cards the observer knows: always their own, plus any opponent
    /// hand revealed to them and not since replaced.
    pub known: PlayerMap<Option<Card>>,
}

impl PlayerView {
    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.eliminated.len()
    }

    /// The cards the observer cannot account for: the full deck minus every
    /// discard and every hand they know. This is exactly the multiset
    /// distributed among the deck, the reserve and unknown opponent hands.
    #[must_use]
    pub fn unseen_cards(&self) -> Vec<Card> {
        let mut counts = [0usize; 8];
        for card in Card::ALL {
            counts[card.value() as usize - 1] = card.count();
        }
        for (_, pile) in self.discards.iter() {
            for card in pile {
                counts[card.value() as usize - 1] -= 1;
            }
        }
        for (_, known) in self.known.iter() {
            if let Some(card) = known {
                counts[card.value() as usize - 1] -= 1;
            }
        }

        let mut unseen = Vec::with_capacity(counts.iter().sum());
        for card in Card::ALL {
            for _ in 0..counts[card.value() as usize - 1] {
                unseen.push(card);
            }
        }
        unseen
    }

    /// All legal actions for the observer after drawing `drawn`.
    ///
    /// Legality depends only on observable information, so agents can
    /// enumerate without consulting the authoritative state.
    #[must_use]
    pub fn legal_actions(&self, drawn: Card) -> Vec<Action> {
        match self.hand {
            Some(hand) => legal_actions(self.me, hand, drawn, &self.eliminated, &self.protected),
            None => Vec::new(),
        }
    }

    /// A uniformly-random legal action after drawing `drawn`.
    #[must_use]
    pub fn random_action(&self, drawn: Card, rng: &mut GameRng) -> Option<Action> {
        let actions = self.legal_actions(drawn);
        rng.choose(&actions).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundState;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_view_masks_opponent_hands() {
        let mut rng = GameRng::new(3);
        let round = RoundState::deal(4, p(0), &mut rng);
        let view = round.view_for(p(0));

        assert_eq!(view.known[p(0)], round.hand(p(0)));
        for opp in [p(1), p(2), p(3)] {
            assert_eq!(view.known[opp], None);
        }
    }

    #[test]
    fn test_unseen_card_census() {
        let mut rng = GameRng::new(3);
        let round = RoundState::deal(4, p(0), &mut rng);
        let view = round.view_for(p(0));

        // 16 cards minus the observer's own hand; nothing discarded yet.
        let unseen = view.unseen_cards();
        assert_eq!(unseen.len(), 15);

        // Deck + reserve + three hidden opponent hands.
        assert_eq!(view.deck_remaining + 1 + 3, 15);
    }

    #[test]
    fn test_unseen_shrinks_with_discards() {
        let mut rng = GameRng::new(9);
        let mut round = RoundState::deal(2, p(0), &mut rng);
        let drawn = round.draw().unwrap();

        let view = round.view_for(p(0));
        let before = view.unseen_cards().len();

        let actions = round.legal_actions(drawn);
        round.apply(&actions[0], drawn).unwrap();

        let after = round.view_for(p(0)).unseen_cards().len();
        assert!(after < before);
    }

    #[test]
    fn test_legal_actions_match_engine() {
        let mut rng = GameRng::new(5);
        let mut round = RoundState::deal(3, p(0), &mut rng);
        let drawn = round.draw().unwrap();

        let from_view = round.view_for(p(0)).legal_actions(drawn);
        let from_engine = round.legal_actions(drawn);
        assert_eq!(from_view, from_engine);
        assert!(!from_view.is_empty());
    }

    #[test]
    fn test_random_action_is_legal() {
        let mut rng = GameRng::new(6);
        let mut round = RoundState::deal(4, p(0), &mut rng);
        let drawn = round.draw().unwrap();
        let view = round.view_for(p(0));

        for _ in 0..50 {
            let act = view.random_action(drawn, &mut rng).unwrap();
            assert!(round.is_legal(&act, drawn));
        }
    }
}
