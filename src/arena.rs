//! Game-loop harness: rounds, tokens, and agent refereeing.
//!
//! The arena owns the authoritative `RoundState` and a table of boxed
//! agents. Agents only ever see their own `PlayerView`; an agent that
//! returns an illegal action has a uniformly-random legal one substituted
//! for it, so a buggy agent degrades to a random player instead of
//! wedging the game.

use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::core::{Action, GameRng, IllegalAction, PlayerId};
use crate::game::RoundState;

/// Tokens of affection needed to win, by table size.
#[must_use]
pub fn tokens_to_win(player_count: usize) -> u32 {
    match player_count {
        2 => 7,
        3 => 5,
        _ => 4,
    }
}

/// The result of one completed game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameOutcome {
    /// The player who reached the token target.
    pub winner: PlayerId,

    /// Final token counts per seat.
    pub tokens: Vec<u32>,

    /// Rounds played.
    pub rounds: u32,
}

/// A table of agents playing full games.
pub struct Arena {
    agents: Vec<Box<dyn Agent>>,
    rng: GameRng,
}

impl Arena {
    /// Seat `agents` at a table. Panics unless there are 2 to 4 of them.
    #[must_use]
    pub fn new(agents: Vec<Box<dyn Agent>>, seed: u64) -> Self {
        assert!(
            (2..=4).contains(&agents.len()),
            "a table seats 2 to 4 players"
        );
        Self {
            agents,
            rng: GameRng::new(seed),
        }
    }

    /// Number of seated agents.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.agents.len()
    }

    /// The display name of the agent in seat `player`.
    #[must_use]
    pub fn agent_name(&self, player: PlayerId) -> &'static str {
        self.agents[player.index()].name()
    }

    /// Play one round with `first` leading off and return its winner.
    ///
    /// Only an engine inconsistency can surface as an error here: agent
    /// misbehavior is absorbed by substitution.
    pub fn play_round(&mut self, first: PlayerId) -> Result<PlayerId, IllegalAction> {
        let n = self.player_count();
        let mut round = RoundState::deal(n, first, &mut self.rng);

        for p in PlayerId::all(n) {
            self.agents[p.index()].on_round_start(&round.view_for(p));
        }

        let mut drawn = match round.draw() {
            Some(card) => card,
            None => return round.round_winner().ok_or(IllegalAction::RoundOver),
        };

        loop {
            let actor = round.current_player();
            // Decide from a view taken after the draw, so the turn marker,
            // protection flags and deck count are the ones the action will
            // be judged against.
            let view = round.view_for(actor);
            let mut action = self.agents[actor.index()].decide(&view, drawn);

            if !round.is_legal(&action, drawn) {
                let substitute = view
                    .random_action(drawn, &mut self.rng)
                    .unwrap_or_else(|| Action::discard(actor, drawn));
                log::warn!(
                    "{} ({}) chose illegal {}, substituting {}",
                    actor,
                    self.agents[actor.index()].name(),
                    action,
                    substitute
                );
                action = substitute;
            }

            round.apply(&action, drawn)?;

            for p in PlayerId::all(n) {
                let view = round.view_for(p);
                self.agents[p.index()].on_action_observed(&action, &view);
            }

            if let Some(winner) = round.round_winner() {
                return Ok(winner);
            }
            match round.next_turn() {
                Some(card) => drawn = card,
                None => return round.round_winner().ok_or(IllegalAction::RoundOver),
            }
        }
    }

    /// Play rounds until a player collects enough tokens of affection.
    /// The round winner leads off the next round.
    pub fn play_game(&mut self) -> Result<GameOutcome, IllegalAction> {
        let n = self.player_count();
        let target = tokens_to_win(n);
        let mut tokens = vec![0u32; n];
        let mut first = PlayerId::new(0);
        let mut rounds = 0;

        loop {
            let winner = self.play_round(first)?;
            tokens[winner.index()] += 1;
            rounds += 1;
            log::debug!(
                "round {} won by {} ({}), tokens {:?}",
                rounds,
                winner,
                self.agents[winner.index()].name(),
                tokens
            );

            if tokens[winner.index()] >= target {
                return Ok(GameOutcome {
                    winner,
                    tokens,
                    rounds,
                });
            }
            first = winner;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{RandomAgent, ReflexAgent};
    use crate::game::PlayerView;
    use crate::core::Card;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_tokens_to_win() {
        assert_eq!(tokens_to_win(2), 7);
        assert_eq!(tokens_to_win(3), 5);
        assert_eq!(tokens_to_win(4), 4);
    }

    #[test]
    fn test_round_produces_winner() {
        let mut arena = Arena::new(
            vec![
                Box::new(RandomAgent::new(1)),
                Box::new(RandomAgent::new(2)),
                Box::new(RandomAgent::new(3)),
                Box::new(RandomAgent::new(4)),
            ],
            10,
        );

        let winner = arena.play_round(p(0)).unwrap();
        assert!(winner.index() < 4);
    }

    #[test]
    fn test_game_reaches_token_target() {
        let mut arena = Arena::new(
            vec![Box::new(ReflexAgent::new(6)), Box::new(RandomAgent::new(5))],
            11,
        );

        let outcome = arena.play_game().unwrap();
        assert_eq!(outcome.tokens[outcome.winner.index()], 7);
        assert!(outcome
            .tokens
            .iter()
            .enumerate()
            .all(|(i, &t)| t <= 7 && (t == 7) == (i == outcome.winner.index())));
    }

    /// An agent that always tries to play the Princess against the rules.
    struct MisbehavingAgent;

    impl Agent for MisbehavingAgent {
        fn name(&self) -> &'static str {
            "misbehaving"
        }

        fn on_round_start(&mut self, _view: &PlayerView) {}

        fn on_action_observed(&mut self, _action: &Action, _view: &PlayerView) {}

        fn decide(&mut self, _view: &PlayerView, _drawn: Card) -> Action {
            Action::princess(p(0))
        }
    }

    #[test]
    fn test_illegal_actions_substituted() {
        let mut arena = Arena::new(
            vec![Box::new(MisbehavingAgent), Box::new(MisbehavingAgent)],
            12,
        );

        // The round completes despite neither agent ever moving legally.
        let winner = arena.play_round(p(0)).unwrap();
        assert!(winner.index() < 2);
    }

    /// Wraps a random agent and checks every view handed to `decide` is the
    /// live post-draw one.
    struct ViewAssertingAgent {
        inner: RandomAgent,
    }

    impl Agent for ViewAssertingAgent {
        fn name(&self) -> &'static str {
            "view-asserting"
        }

        fn on_round_start(&mut self, _view: &PlayerView) {}

        fn on_action_observed(&mut self, _action: &Action, _view: &PlayerView) {}

        fn decide(&mut self, view: &PlayerView, drawn: Card) -> Action {
            assert_eq!(view.current, view.me, "deciding for someone else's turn");
            assert!(view.hand.is_some(), "deciding without a hand");
            assert!(!view.protected[view.me], "protection not cleared by the draw");
            self.inner.decide(view, drawn)
        }
    }

    #[test]
    fn test_decide_views_are_post_draw() {
        let mut arena = Arena::new(
            vec![
                Box::new(ViewAssertingAgent {
                    inner: RandomAgent::new(31),
                }),
                Box::new(ViewAssertingAgent {
                    inner: RandomAgent::new(32),
                }),
                Box::new(ViewAssertingAgent {
                    inner: RandomAgent::new(33),
                }),
            ],
            13,
        );

        for _ in 0..5 {
            let winner = arena.play_round(p(0)).unwrap();
            assert!(winner.index() < 3);
        }
    }

    /// Wraps a searching agent and checks every returned action belongs to
    /// the seat that was asked. Substitution would otherwise mask a search
    /// acting for the wrong player.
    struct SeatAssertingAgent {
        inner: crate::mcts::MCTSAgent,
    }

    impl Agent for SeatAssertingAgent {
        fn name(&self) -> &'static str {
            "seat-asserting"
        }

        fn on_round_start(&mut self, _view: &PlayerView) {}

        fn on_action_observed(&mut self, _action: &Action, _view: &PlayerView) {}

        fn decide(&mut self, view: &PlayerView, drawn: Card) -> Action {
            let action = self.inner.decide(view, drawn);
            assert_eq!(action.player, view.me, "search acted for another seat");
            action
        }
    }

    #[test]
    fn test_searching_agents_act_for_themselves_all_round() {
        use crate::mcts::MCTSConfig;

        let seat = |seed| {
            Box::new(SeatAssertingAgent {
                inner: crate::mcts::MCTSAgent::new(
                    MCTSConfig::default().with_time_budget_ms(10).with_seed(seed),
                ),
            }) as Box<dyn Agent>
        };
        let mut arena = Arena::new(vec![seat(1), seat(2)], 14);

        for _ in 0..3 {
            let winner = arena.play_round(p(0)).unwrap();
            assert!(winner.index() < 2);
        }
    }
}
