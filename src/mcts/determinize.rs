//! Determinization: resolving an observation into one concrete round.
//!
//! The observer knows their own hand, the card they just drew, every
//! discard, and any opponent card revealed to them. Everything else
//! (unknown opponent hands, the deck, the reserve) is a uniformly-random
//! assignment of the unseen cards, consistent by construction with
//! everything observed.

use crate::core::{Card, GameRng, PlayerId, PlayerMap};
use crate::game::{PlayerView, RoundState};

/// Sample one complete round state consistent with `view`.
///
/// `drawn` is the card the observer is holding outside their hand slot at
/// decision time (already off the deck, not yet discarded); pass `None`
/// between turns. A held `drawn` card means the observer is the player to
/// move, so the sample is rooted at `view.me` regardless of what a stale
/// `view.current` claims. Cards the observer has seen appear unchanged in
/// every sample; unseen cards are shuffled and dealt to the unknown slots.
/// With no unseen cards left the result is fully determined by the
/// observation.
#[must_use]
pub fn determinize(view: &PlayerView, drawn: Option<Card>, rng: &mut GameRng) -> RoundState {
    let n = view.player_count();
    let current = if drawn.is_some() { view.me } else { view.current };

    let mut unseen = view.unseen_cards();
    if let Some(card) = drawn {
        // The drawn card is in the observer's grip, not in any unseen slot.
        if let Some(pos) = unseen.iter().position(|&c| c == card) {
            unseen.swap_remove(pos);
        }
    }
    rng.shuffle(&mut unseen);

    let mut hands: PlayerMap<Option<Card>> = PlayerMap::with_value(n, None);
    for p in PlayerId::all(n) {
        if view.eliminated[p] {
            continue;
        }
        hands[p] = match view.known[p] {
            Some(card) => Some(card),
            None => unseen.pop(),
        };
    }

    let reserve = if view.reserve_present {
        unseen.pop()
    } else {
        None
    };

    // Whatever remains is the deck, in the sampled order.
    debug_assert_eq!(unseen.len(), view.deck_remaining);

    RoundState::from_parts(
        hands,
        unseen,
        reserve,
        view.discards.clone(),
        view.eliminated.clone(),
        view.protected.clone(),
        current,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn mid_turn_view(seed: u64) -> (PlayerView, Card) {
        let mut rng = GameRng::new(seed);
        let mut round = RoundState::deal(4, p(0), &mut rng);
        let drawn = round.draw().unwrap();
        (round.view_for(p(0)), drawn)
    }

    #[test]
    fn test_own_hand_preserved() {
        let (view, drawn) = mid_turn_view(17);
        let mut rng = GameRng::new(5);

        for _ in 0..100 {
            let state = determinize(&view, Some(drawn), &mut rng);
            assert_eq!(state.hand(p(0)), view.hand);
        }
    }

    #[test]
    fn test_revealed_card_preserved() {
        use crate::game::DiscardPile;

        // Stage a table where player 0 actually holds the Priest.
        let mut hands = PlayerMap::with_value(4, None);
        hands[p(0)] = Some(Card::Priest);
        hands[p(1)] = Some(Card::Guard);
        hands[p(2)] = Some(Card::King);
        hands[p(3)] = Some(Card::Baron);
        let mut pool = Card::full_deck();
        for held in [Card::Priest, Card::Guard, Card::King, Card::Baron] {
            if let Some(pos) = pool.iter().position(|&c| c == held) {
                pool.swap_remove(pos);
            }
        }
        let reserve = pool.pop();
        let mut round = RoundState::from_parts(
            hands,
            pool,
            reserve,
            PlayerMap::with_value(4, DiscardPile::new()),
            PlayerMap::with_value(4, false),
            PlayerMap::with_value(4, false),
            p(0),
        );

        let drawn = round.draw().unwrap();
        round
            .apply(&Action::priest(p(0), p(2)).unwrap(), drawn)
            .unwrap();
        let view = round.view_for(p(0));
        assert_eq!(view.known[p(2)], Some(Card::King));

        let mut rng = GameRng::new(23);
        for _ in 0..100 {
            let state = determinize(&view, None, &mut rng);
            assert_eq!(state.hand(p(2)), Some(Card::King));
        }
    }

    #[test]
    fn test_sample_rooted_at_observer() {
        let mut rng = GameRng::new(37);
        let mut round = RoundState::deal(3, p(0), &mut rng);
        let drawn = round.draw().unwrap();

        // A decision-time sample always puts the observer to move, even if
        // the view's turn marker lags behind.
        let mut view = round.view_for(p(0));
        view.current = p(2);

        let state = determinize(&view, Some(drawn), &mut rng);
        assert_eq!(state.current_player(), p(0));
    }

    #[test]
    fn test_public_flags_carried_over() {
        let (view, drawn) = mid_turn_view(31);
        let mut rng = GameRng::new(7);
        let state = determinize(&view, Some(drawn), &mut rng);

        assert_eq!(state.current_player(), view.current);
        assert_eq!(state.deck_remaining(), view.deck_remaining);
        for q in PlayerId::all(4) {
            assert_eq!(state.is_eliminated(q), view.eliminated[q]);
            assert_eq!(state.is_protected(q), view.protected[q]);
            assert_eq!(state.discards(q), view.discards[q].as_slice());
        }
    }

    #[test]
    fn test_every_unseen_slot_filled() {
        let (view, drawn) = mid_turn_view(43);
        let mut rng = GameRng::new(9);
        let state = determinize(&view, Some(drawn), &mut rng);

        // All three hidden opponents got a hand, the reserve exists, and
        // the deck count matches the observation.
        for q in [p(1), p(2), p(3)] {
            assert!(state.hand(q).is_some());
        }
        assert_eq!(state.deck_remaining(), view.deck_remaining);

        // 16 cards total: 4 hands + drawn-in-grip + reserve + deck.
        assert_eq!(4 + 1 + 1 + state.deck_remaining(), 16);
    }

    #[test]
    fn test_samples_vary() {
        let (view, drawn) = mid_turn_view(59);
        let mut rng = GameRng::new(13);

        let first = determinize(&view, Some(drawn), &mut rng);
        let varied = (0..50).any(|_| determinize(&view, Some(drawn), &mut rng) != first);
        assert!(varied, "determinization should sample different worlds");
    }
}
