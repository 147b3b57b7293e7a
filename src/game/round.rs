//! The authoritative round state and card-effect resolution.
//!
//! `RoundState` is a complete, concrete snapshot of one round: every hand is
//! materialized, including hands the players themselves cannot see. The game
//! loop owns one as the source of truth; the search builds them out of
//! determinized observations and clones them freely for simulation, so the
//! struct is plain owned data with structural copy semantics.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, Card, GameRng, IllegalAction, PlayerId, PlayerMap};

use super::legal::{legal_actions, legal_targets, playable_cards};
use super::view::PlayerView;

/// A discard pile. Eight slots covers any pile a 16-card round can produce.
pub type DiscardPile = SmallVec<[Card; 8]>;

/// Complete state of one Love Letter round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// Hand card per player; `None` once eliminated.
    hands: PlayerMap<Option<Card>>,

    /// Drawable deck; the top card is the last element.
    deck: Vec<Card>,

    /// The card set aside at the deal. A Prince redraw takes it when the
    /// deck is empty.
    reserve: Option<Card>,

    /// Face-up discard piles.
    discards: PlayerMap<DiscardPile>,

    /// Elimination flags.
    eliminated: PlayerMap<bool>,

    /// Handmaid protection flags, cleared when the player next draws.
    protected: PlayerMap<bool>,

    /// `known[viewer][holder]`: does `viewer` know `holder`'s current hand?
    /// Seeded with self-knowledge; updated by Priest, Baron ties, King
    /// swaps, and invalidated whenever a hand changes.
    known: PlayerMap<PlayerMap<bool>>,

    /// The player whose turn it is (or who is acting at this snapshot).
    current: PlayerId,
}

impl RoundState {
    /// Deal a fresh round: shuffle the 16 cards, set one aside as the
    /// reserve, give each player one card. `starter` acts first.
    pub fn deal(player_count: usize, starter: PlayerId, rng: &mut GameRng) -> Self {
        let mut deck = Card::full_deck();
        rng.shuffle(&mut deck);

        let reserve = deck.pop();
        let mut hands = PlayerMap::with_value(player_count, None);
        for p in PlayerId::all(player_count) {
            hands[p] = deck.pop();
        }

        let mut known = PlayerMap::with_value(player_count, PlayerMap::with_value(player_count, false));
        for p in PlayerId::all(player_count) {
            known[p][p] = true;
        }

        Self {
            hands,
            deck,
            reserve,
            discards: PlayerMap::with_value(player_count, SmallVec::new()),
            eliminated: PlayerMap::with_value(player_count, false),
            protected: PlayerMap::with_value(player_count, false),
            known,
            current: starter,
        }
    }

    /// Assemble a round state from explicit parts.
    ///
    /// Used by the determinizer to realize a sampled assignment of unseen
    /// cards, and by tests to stage exact scenarios.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn from_parts(
        hands: PlayerMap<Option<Card>>,
        deck: Vec<Card>,
        reserve: Option<Card>,
        discards: PlayerMap<DiscardPile>,
        eliminated: PlayerMap<bool>,
        protected: PlayerMap<bool>,
        current: PlayerId,
    ) -> Self {
        let n = hands.len();
        let mut known = PlayerMap::with_value(n, PlayerMap::with_value(n, false));
        for p in PlayerId::all(n) {
            known[p][p] = true;
        }
        Self {
            hands,
            deck,
            reserve,
            discards,
            eliminated,
            protected,
            known,
            current,
        }
    }

    // === Observers ===

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// The player to move at this snapshot.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The hand card held by `player`, if still in the round.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<Card> {
        self.hands[player]
    }

    /// Whether `player` has been eliminated.
    #[must_use]
    pub fn is_eliminated(&self, player: PlayerId) -> bool {
        self.eliminated[player]
    }

    /// Whether `player` is protected by the Handmaid.
    #[must_use]
    pub fn is_protected(&self, player: PlayerId) -> bool {
        self.protected[player]
    }

    /// Whether every other active player is protected.
    #[must_use]
    pub fn all_others_protected(&self, player: PlayerId) -> bool {
        PlayerId::all(self.player_count())
            .filter(|&p| p != player && !self.eliminated[p])
            .all(|p| self.protected[p])
    }

    /// Players still in the round, in seat order.
    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        PlayerId::all(self.player_count()).filter(|&p| !self.eliminated[p])
    }

    /// Cards left in the drawable deck.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// `player`'s face-up discard pile.
    #[must_use]
    pub fn discards(&self, player: PlayerId) -> &[Card] {
        &self.discards[player]
    }

    /// Whether the round has ended: one player left, or the deck exhausted.
    ///
    /// A between-turns check. The player who drew the last card still
    /// finishes their turn; `check_legal` only rejects for eliminations.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.active_players().count() <= 1 || self.deck.is_empty()
    }

    /// The round winner, or `None` while the round is live.
    ///
    /// Last player standing wins outright; at deck exhaustion the highest
    /// hand wins, with ties broken by discard-pile sum and then by the
    /// lowest seat, so a decided round always names exactly one player.
    #[must_use]
    pub fn round_winner(&self) -> Option<PlayerId> {
        if !self.is_round_over() {
            return None;
        }
        self.active_players().max_by_key(|&p| {
            let value = self.hands[p].map_or(0, Card::value);
            let pile: u32 = self.discards[p].iter().map(|c| u32::from(c.value())).sum();
            (value, pile, std::cmp::Reverse(p.0))
        })
    }

    // === Turn sequencing ===

    /// Start the current player's turn: clear their protection and draw the
    /// top card. Returns `None` if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.protected[self.current] = false;
        self.deck.pop()
    }

    /// Move the turn marker to the next active player.
    pub fn advance(&mut self) {
        let n = self.player_count();
        let mut next = self.current.next(n);
        while self.eliminated[next] {
            next = next.next(n);
        }
        self.current = next;
    }

    /// Advance to the next active player and start their turn.
    ///
    /// This is the rollout step: advance, clear protection, draw.
    pub fn next_turn(&mut self) -> Option<Card> {
        self.advance();
        self.draw()
    }

    // === Legality ===

    /// Check an action against the full rules for the current player, who
    /// has just drawn `drawn`.
    ///
    /// A held `drawn` card means a turn is in flight, and the player who
    /// drew the last card still completes their turn; only eliminations can
    /// make the in-flight action moot.
    pub fn check_legal(&self, action: &Action, drawn: Card) -> Result<(), IllegalAction> {
        if self.active_players().count() <= 1 {
            return Err(IllegalAction::RoundOver);
        }
        if action.player != self.current {
            return Err(IllegalAction::OutOfTurn {
                player: action.player,
            });
        }

        let hand = self.hands[action.player].ok_or(IllegalAction::OutOfTurn {
            player: action.player,
        })?;
        if action.card != hand && action.card != drawn {
            return Err(IllegalAction::CardNotHeld {
                player: action.player,
                card: action.card,
            });
        }
        if !playable_cards(hand, drawn).contains(&action.card) {
            return Err(IllegalAction::CountessForced);
        }

        match action.target {
            Some(target) => {
                if self.eliminated[target] {
                    return Err(IllegalAction::TargetEliminated { target });
                }
                if self.protected[target] && target != action.player {
                    return Err(IllegalAction::TargetProtected { target });
                }
            }
            None => {
                // A targeted card may only be idly discarded when no legal
                // target exists.
                if action.card.needs_target()
                    && !legal_targets(action.player, action.card, &self.eliminated, &self.protected)
                        .is_empty()
                {
                    return Err(IllegalAction::DiscardWithTarget { card: action.card });
                }
            }
        }

        Ok(())
    }

    /// Whether an action is legal for the current player after drawing
    /// `drawn`.
    #[must_use]
    pub fn is_legal(&self, action: &Action, drawn: Card) -> bool {
        self.check_legal(action, drawn).is_ok()
    }

    /// All legal actions for the current player after drawing `drawn`.
    #[must_use]
    pub fn legal_actions(&self, drawn: Card) -> Vec<Action> {
        match self.hands[self.current] {
            Some(hand) => legal_actions(
                self.current,
                hand,
                drawn,
                &self.eliminated,
                &self.protected,
            ),
            None => Vec::new(),
        }
    }

    // === Application ===

    /// Apply an action for the current player, who has just drawn `drawn`.
    ///
    /// Resolves the full card effect. Does not advance the turn; callers
    /// sequence turns with `advance`/`next_turn`.
    pub fn apply(&mut self, action: &Action, drawn: Card) -> Result<(), IllegalAction> {
        self.check_legal(action, drawn)?;

        let player = action.player;

        // The unplayed card becomes (or remains) the hand.
        if Some(action.card) == self.hands[player] {
            self.hands[player] = Some(drawn);
            self.invalidate_known(player);
        }
        self.discards[player].push(action.card);

        match action.card {
            Card::Guard => {
                if let Some(target) = action.target {
                    if self.hands[target] == action.guess {
                        self.eliminate(target);
                    }
                }
            }
            Card::Priest => {
                if let Some(target) = action.target {
                    self.known[player][target] = true;
                }
            }
            Card::Baron => {
                if let Some(target) = action.target {
                    let mine = self.hands[player].map_or(0, Card::value);
                    let theirs = self.hands[target].map_or(0, Card::value);
                    match mine.cmp(&theirs) {
                        std::cmp::Ordering::Less => self.eliminate(player),
                        std::cmp::Ordering::Greater => self.eliminate(target),
                        std::cmp::Ordering::Equal => {
                            // Tie: both see both hands, nobody is out.
                            self.known[player][target] = true;
                            self.known[target][player] = true;
                        }
                    }
                }
            }
            Card::Handmaid => {
                self.protected[player] = true;
            }
            Card::Prince => {
                if let Some(target) = action.target {
                    self.prince_discard(target);
                }
            }
            Card::King => {
                if let Some(target) = action.target {
                    let mine = self.hands[player];
                    self.hands[player] = self.hands[target];
                    self.hands[target] = mine;
                    // Knowledge follows the swapped cards, and each side
                    // has now seen the card they handed over.
                    for v in PlayerId::all(self.player_count()) {
                        let knew_player = self.known[v][player];
                        self.known[v][player] = self.known[v][target];
                        self.known[v][target] = knew_player;
                    }
                    self.known[player][target] = true;
                    self.known[target][player] = true;
                    self.known[player][player] = true;
                    self.known[target][target] = true;
                }
            }
            Card::Countess => {}
            Card::Princess => {
                self.eliminate(player);
            }
        }

        Ok(())
    }

    /// Build `viewer`'s observable slice of this round.
    #[must_use]
    pub fn view_for(&self, viewer: PlayerId) -> PlayerView {
        let n = self.player_count();
        let mut known_cards = PlayerMap::with_value(n, None);
        for holder in PlayerId::all(n) {
            if self.known[viewer][holder] {
                known_cards[holder] = self.hands[holder];
            }
        }

        PlayerView {
            me: viewer,
            hand: self.hands[viewer],
            current: self.current,
            deck_remaining: self.deck.len(),
            reserve_present: self.reserve.is_some(),
            discards: self.discards.clone(),
            eliminated: self.eliminated.clone(),
            protected: self.protected.clone(),
            known: known_cards,
        }
    }

    // === Internals ===

    fn eliminate(&mut self, player: PlayerId) {
        self.eliminated[player] = true;
        if let Some(card) = self.hands[player].take() {
            self.discards[player].push(card);
        }
        self.invalidate_known(player);
    }

    /// Prince effect on `target`: discard the hand, eliminate on a
    /// discarded Princess, otherwise redraw (from the reserve once the
    /// deck is empty).
    fn prince_discard(&mut self, target: PlayerId) {
        let Some(discarded) = self.hands[target].take() else {
            return;
        };
        self.discards[target].push(discarded);
        self.invalidate_known(target);

        if discarded == Card::Princess {
            self.eliminated[target] = true;
            return;
        }
        match self.deck.pop().or_else(|| self.reserve.take()) {
            Some(card) => self.hands[target] = Some(card),
            // No card anywhere to redraw; the player cannot continue.
            None => self.eliminated[target] = true,
        }
    }

    /// `holder`'s hand changed: nobody but `holder` knows it any more.
    fn invalidate_known(&mut self, holder: PlayerId) {
        for v in PlayerId::all(self.player_count()) {
            self.known[v][holder] = v == holder;
        }
    }
}
