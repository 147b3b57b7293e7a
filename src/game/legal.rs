//! Legal-action enumeration shared by the rules engine, the agents and the
//! search.
//!
//! One routine produces the full legal action set for a player/card pair so
//! that expansion, rollout sampling and agent play all mirror the
//! authoritative resolution exactly: the Countess force, the ban on
//! targeting protected or eliminated players, the Prince's self-target
//! fallback, and the bare discard when no target exists at all.

use smallvec::SmallVec;

use crate::core::{Action, Card, PlayerId, PlayerMap};

/// The cards a player may legally play out of `hand` + `drawn`.
///
/// Holding the Countess with the King or Prince forces the Countess;
/// otherwise both cards are playable (one entry if they are equal copies).
#[must_use]
pub fn playable_cards(hand: Card, drawn: Card) -> SmallVec<[Card; 2]> {
    let mut cards = SmallVec::new();
    let forced = (hand == Card::Countess && drawn.forces_countess())
        || (drawn == Card::Countess && hand.forces_countess());
    if forced {
        cards.push(Card::Countess);
    } else if hand == drawn {
        cards.push(hand);
    } else {
        cards.push(hand);
        cards.push(drawn);
    }
    cards
}

/// Players that `player` may legally name when playing `card`.
///
/// Eliminated and Handmaid-protected players are never targets. The Prince
/// may additionally name its own player, which is why it always has at
/// least one target.
#[must_use]
pub fn legal_targets(
    player: PlayerId,
    card: Card,
    eliminated: &PlayerMap<bool>,
    protected: &PlayerMap<bool>,
) -> Vec<PlayerId> {
    let mut targets: Vec<PlayerId> = PlayerId::all(eliminated.len())
        .filter(|&t| t != player && !eliminated[t] && !protected[t])
        .collect();
    if card.may_target_self() {
        targets.push(player);
    }
    targets
}

/// Every legal action for `player` holding `hand` after drawing `drawn`.
///
/// Guard actions fan out over all legal targets and all seven non-Guard
/// guesses. A targeted card with no legal target degrades to a bare
/// no-effect discard.
#[must_use]
pub fn legal_actions(
    player: PlayerId,
    hand: Card,
    drawn: Card,
    eliminated: &PlayerMap<bool>,
    protected: &PlayerMap<bool>,
) -> Vec<Action> {
    let mut actions = Vec::new();

    for card in playable_cards(hand, drawn) {
        if !card.needs_target() {
            actions.push(Action {
                player,
                card,
                target: None,
                guess: None,
            });
            continue;
        }

        let targets = legal_targets(player, card, eliminated, protected);
        if targets.is_empty() {
            actions.push(Action::discard(player, card));
            continue;
        }

        for target in targets {
            if card == Card::Guard {
                for guess in Card::ALL {
                    if guess == Card::Guard {
                        continue;
                    }
                    actions.push(Action {
                        player,
                        card,
                        target: Some(target),
                        guess: Some(guess),
                    });
                }
            } else {
                actions.push(Action {
                    player,
                    card,
                    target: Some(target),
                    guess: None,
                });
            }
        }
    }

    actions
}
