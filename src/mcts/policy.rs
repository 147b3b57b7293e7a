//! Selection and rollout policies.
//!
//! Policies are trait-based so the driver can be exercised with custom
//! behavior in tests:
//! - `SelectionPolicy`: how to descend from a node to a child (UCB1)
//! - `RolloutPolicy`: how to play a leaf state out to a round winner

use crate::core::{GameRng, PlayerId};
use crate::game::RoundState;

use super::config::MCTSConfig;
use super::node::NodeId;
use super::tree::SearchTree;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for choosing which child to descend into.
pub trait SelectionPolicy: Send + Sync {
    /// Select a child of `node`, or `None` if it has no children.
    fn select(&self, tree: &SearchTree, node: NodeId, config: &MCTSConfig) -> Option<NodeId>;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high mean score) with exploration (low visits).
/// Formula: `score/visits + C * sqrt(ln(parent_visits) / visits)`.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

/// The UCB1 value of one child.
///
/// An unvisited child has infinite priority; a pruned child's negative
/// sentinel score dominates the formula and repels selection.
#[must_use]
pub fn ucb_value(score: f64, visits: u32, parent_visits: u32, exploration: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }
    let mean = score / f64::from(visits);
    let bonus = exploration * (f64::from(parent_visits.max(1)).ln() / f64::from(visits)).sqrt();
    mean + bonus
}

impl SelectionPolicy for UCB1 {
    fn select(&self, tree: &SearchTree, node: NodeId, config: &MCTSConfig) -> Option<NodeId> {
        let parent_visits = tree.get(node).visits;

        tree.get(node)
            .children
            .iter()
            .copied()
            .map(|child| {
                let n = tree.get(child);
                (
                    child,
                    ucb_value(n.score, n.visits, parent_visits, config.exploration_constant),
                )
            })
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(child, _)| child)
    }
}

// =============================================================================
// Rollout Policy
// =============================================================================

/// Policy for playing a state out to a terminal round outcome.
pub trait RolloutPolicy: Send + Sync {
    /// Play `start` to completion and return the winning player.
    ///
    /// Operates on a private copy; the caller's state is never mutated.
    fn rollout(&self, start: &RoundState, rng: &mut GameRng) -> PlayerId;
}

/// Uniformly-random rollout.
///
/// Repeatedly advances to the next player, draws, and applies a
/// uniformly-random legal action until the round is decided. Terminates
/// within deck-size turns: every turn consumes a card.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl RolloutPolicy for RandomRollout {
    fn rollout(&self, start: &RoundState, rng: &mut GameRng) -> PlayerId {
        let mut state = start.clone();

        loop {
            if let Some(winner) = state.round_winner() {
                return winner;
            }

            let Some(drawn) = state.next_turn() else {
                // Deck ran dry on the advance; the showdown decides next
                // time around.
                continue;
            };

            let actions = state.legal_actions(drawn);
            if let Some(&action) = rng.choose(&actions) {
                // Enumerated actions always apply; the deck shrinking
                // every turn bounds the loop regardless.
                let _ = state.apply(&action, drawn);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Card, PlayerMap};
    use crate::game::{DiscardPile, RoundState};
    use crate::mcts::node::SearchNode;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_unvisited_child_has_infinite_priority() {
        let visited = ucb_value(80.0, 100, 111, 1.41);
        let unvisited = ucb_value(0.0, 0, 111, 1.41);

        assert!(unvisited.is_infinite());
        assert!(unvisited > visited);
    }

    #[test]
    fn test_pruned_child_repels_selection() {
        let pruned = ucb_value(SearchNode::PRUNED, 5, 100, 1.41);
        let ordinary = ucb_value(0.0, 50, 100, 1.41);

        assert!(pruned < ordinary);
        assert_eq!(pruned, f64::NEG_INFINITY);
    }

    #[test]
    fn test_exploration_bonus_decays_with_visits() {
        let few = ucb_value(5.0, 10, 100, 1.41);
        let many = ucb_value(50.0, 100, 100, 1.41);

        // Same mean score (0.5); fewer visits earn the bigger bonus.
        assert!(few > many);
    }

    #[test]
    fn test_ucb1_selects_unvisited_child() {
        let mut rng = GameRng::new(3);
        let root_state = RoundState::deal(2, p(0), &mut rng);
        let mut tree = SearchTree::new(root_state.clone());
        let root = tree.root();

        for i in 0..3 {
            let id = tree.alloc_child(
                root,
                SearchNode::child(root, root_state.clone(), Action::handmaid(p(0))),
            );
            if i != 2 {
                tree.get_mut(id).visits = 10 + i;
                tree.get_mut(id).score = 40.0;
            }
        }
        tree.get_mut(root).visits = 21;

        let selected = UCB1
            .select(&tree, root, &MCTSConfig::default())
            .unwrap();
        assert_eq!(selected, tree.get(root).children[2]);
    }

    #[test]
    fn test_ucb1_on_leaf_is_none() {
        let mut rng = GameRng::new(3);
        let tree = SearchTree::new(RoundState::deal(2, p(0), &mut rng));
        assert!(UCB1.select(&tree, tree.root(), &MCTSConfig::default()).is_none());
    }

    #[test]
    fn test_rollout_returns_active_winner() {
        let mut rng = GameRng::new(77);
        let mut state = RoundState::deal(4, p(0), &mut rng);
        // Put the round mid-turn the way the search sees it.
        let _ = state.draw();

        for _ in 0..20 {
            let winner = RandomRollout.rollout(&state, &mut rng);
            assert!(!state.is_eliminated(winner) || state.round_winner() == Some(winner));
        }
    }

    #[test]
    fn test_rollout_does_not_mutate_input() {
        let mut rng = GameRng::new(78);
        let state = RoundState::deal(3, p(0), &mut rng);
        let snapshot = state.clone();

        let _ = RandomRollout.rollout(&state, &mut rng);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_rollout_final_turn_reaches_showdown() {
        // One card left: the next player draws it, still acts, and the
        // showdown crowns player 0's Princess whatever they chose.
        let mut hands = PlayerMap::with_value(2, None);
        hands[p(0)] = Some(Card::Princess);
        hands[p(1)] = Some(Card::Countess);
        let state = RoundState::from_parts(
            hands,
            vec![Card::Priest],
            Some(Card::Guard),
            PlayerMap::with_value(2, DiscardPile::new()),
            PlayerMap::with_value(2, false),
            PlayerMap::with_value(2, false),
            p(0),
        );

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            assert_eq!(RandomRollout.rollout(&state, &mut rng), p(0));
        }
    }

    #[test]
    fn test_rollout_short_circuits_decided_round() {
        // Player 1 eliminated, player 0 alone: decided before any turn.
        let mut hands = PlayerMap::with_value(2, None);
        hands[p(0)] = Some(Card::Princess);
        let mut eliminated = PlayerMap::with_value(2, false);
        eliminated[p(1)] = true;
        let state = RoundState::from_parts(
            hands,
            vec![Card::Guard; 3],
            Some(Card::Priest),
            PlayerMap::with_value(2, DiscardPile::new()),
            eliminated,
            PlayerMap::with_value(2, false),
            p(0),
        );

        let mut rng = GameRng::new(1);
        assert_eq!(RandomRollout.rollout(&state, &mut rng), p(0));
    }
}
