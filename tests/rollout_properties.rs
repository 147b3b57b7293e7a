//! Property tests over randomized deals and determinized worlds.

use proptest::prelude::*;

use loveletter::core::{GameRng, PlayerId};
use loveletter::game::RoundState;
use loveletter::mcts::{determinize, RandomRollout, RolloutPolicy};

fn mid_turn(seed: u64, players: usize) -> (RoundState, loveletter::Card) {
    let mut rng = GameRng::new(seed);
    let mut round = RoundState::deal(players, PlayerId::new(0), &mut rng);
    let drawn = round.draw().expect("fresh deck");
    (round, drawn)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Rollouts always finish and always name a surviving player.
    #[test]
    fn rollout_terminates_with_valid_winner(seed in any::<u64>(), players in 2usize..=4) {
        let (round, drawn) = mid_turn(seed, players);
        let view = round.view_for(PlayerId::new(0));

        let mut rng = GameRng::new(seed ^ 0xDEAD);
        let world = determinize(&view, Some(drawn), &mut rng);
        let winner = RandomRollout.rollout(&world, &mut rng);

        prop_assert!(winner.index() < players);
        prop_assert!(!world.is_eliminated(winner));
    }

    /// A determinized world never contradicts the observation it came from.
    #[test]
    fn determinized_world_matches_observation(seed in any::<u64>(), players in 2usize..=4) {
        let (round, drawn) = mid_turn(seed, players);
        let me = PlayerId::new(0);
        let view = round.view_for(me);

        let mut rng = GameRng::new(seed ^ 0xBEEF);
        let world = determinize(&view, Some(drawn), &mut rng);

        prop_assert_eq!(world.hand(me), view.hand);
        prop_assert_eq!(world.current_player(), view.current);
        prop_assert_eq!(world.deck_remaining(), view.deck_remaining);
        for q in PlayerId::all(players) {
            prop_assert_eq!(world.is_eliminated(q), view.eliminated[q]);
            prop_assert_eq!(world.is_protected(q), view.protected[q]);
            prop_assert_eq!(world.discards(q), view.discards[q].as_slice());
        }

        // Card conservation: hands + deck + reserve + discards + the card
        // in the deciding player's grip add back up to the full deck.
        let hands: usize = PlayerId::all(players)
            .filter(|&q| world.hand(q).is_some())
            .count();
        let discarded: usize = PlayerId::all(players)
            .map(|q| world.discards(q).len())
            .sum();
        let total = hands + world.deck_remaining() + 1 + discarded + 1;
        prop_assert_eq!(total, 16);
    }

    /// Every legal action applies cleanly on the world it was enumerated
    /// from.
    #[test]
    fn legal_actions_apply_cleanly(seed in any::<u64>(), players in 2usize..=4) {
        let (round, drawn) = mid_turn(seed, players);
        let view = round.view_for(PlayerId::new(0));

        let mut rng = GameRng::new(seed ^ 0xF00D);
        let world = determinize(&view, Some(drawn), &mut rng);

        let actions = world.legal_actions(drawn);
        prop_assert!(!actions.is_empty());
        for action in actions {
            let mut scratch = world.clone();
            prop_assert!(scratch.apply(&action, drawn).is_ok(), "{} failed", action);
        }
    }
}
