//! The search driver: determinize, select, expand, simulate, backpropagate.
//!
//! Each decision builds a fresh tree over one determinized world and runs
//! iterations until the wall-clock budget runs out. The final pick is the
//! robust child (most visits), whose action is returned to the caller.

use std::time::{Duration, Instant};

use crate::core::{Action, Card, GameRng, PlayerId};
use crate::game::PlayerView;

use super::config::MCTSConfig;
use super::determinize::determinize;
use super::node::{NodeId, SearchNode};
use super::policy::{RandomRollout, RolloutPolicy, SelectionPolicy, UCB1};
use super::stats::SearchStats;
use super::tree::SearchTree;

/// Determinized Monte Carlo tree search over one player's observation.
pub struct MCTSSearch {
    config: MCTSConfig,
    selection: Box<dyn SelectionPolicy>,
    rollout: Box<dyn RolloutPolicy>,
    rng: GameRng,
    stats: SearchStats,
    tree: Option<SearchTree>,
}

impl MCTSSearch {
    /// Create a search with UCB1 selection and random rollouts.
    #[must_use]
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            selection: Box::new(UCB1),
            rollout: Box::new(RandomRollout),
            rng,
            stats: SearchStats::new(),
            tree: None,
        }
    }

    /// Replace the selection policy.
    #[must_use]
    pub fn with_selection(mut self, policy: Box<dyn SelectionPolicy>) -> Self {
        self.selection = policy;
        self
    }

    /// Replace the rollout policy.
    #[must_use]
    pub fn with_rollout(mut self, policy: Box<dyn RolloutPolicy>) -> Self {
        self.rollout = policy;
        self
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Statistics from the most recent `search` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The tree from the most recent `search` call, rooted at the chosen
    /// child. `None` before the first search or after a fallback decision.
    #[must_use]
    pub fn tree(&self) -> Option<&SearchTree> {
        self.tree.as_ref()
    }

    /// Decide which action to take, having just drawn `drawn`.
    ///
    /// Determinizes one world from `view`, searches it for the configured
    /// budget, and returns the robust child's action. Falls back to a
    /// uniformly-random legal action if the budget expired before any
    /// expansion happened.
    pub fn search(&mut self, view: &PlayerView, drawn: Card) -> Action {
        let start = Instant::now();
        let deadline = start + Duration::from_millis(self.config.time_budget_ms);
        self.stats.reset();
        self.tree = None;

        let me = view.me;
        let root_state = determinize(view, Some(drawn), &mut self.rng);
        let mut tree = SearchTree::new(root_state);

        while Instant::now() < deadline {
            if self.config.max_iterations != 0 && self.stats.iterations >= self.config.max_iterations
            {
                break;
            }
            self.iterate(&mut tree, drawn, me);
            self.stats.iterations += 1;
        }
        self.stats.time_us = start.elapsed().as_micros() as u64;

        log::debug!(
            "search for {} done: {} iterations, {} nodes, {} rollouts in {}us",
            me,
            self.stats.iterations,
            tree.len(),
            self.stats.rollouts,
            self.stats.time_us
        );

        match tree.best_child(tree.root()) {
            Some(best) => {
                let action = tree.get(best).action;
                tree.promote(best);
                self.tree = Some(tree);
                match action {
                    Some(action) => action,
                    None => self.fallback(view, drawn),
                }
            }
            None => self.fallback(view, drawn),
        }
    }

    /// One select/expand/simulate/backpropagate pass.
    fn iterate(&mut self, tree: &mut SearchTree, drawn: Card, me: PlayerId) {
        // Selection: UCB1 descent to a leaf.
        let mut node = tree.root();
        while let Some(next) = self.selection.select(tree, node, &self.config) {
            node = next;
        }

        // Expansion: one child per legal action of the leaf's player to
        // move, all holding the same decision's drawn card. The root's turn
        // is in flight (the drawn card is in the grip), so an empty deck
        // alone does not end it; deeper nodes sit between turns.
        let expandable = if node == tree.root() {
            tree.get(node).state.active_players().count() > 1
        } else {
            !tree.get(node).state.is_round_over()
        };
        if expandable {
            self.expand(tree, node, drawn);
        }

        // Simulation from a random new child, or the leaf itself when it
        // had nothing to expand.
        let explore = if tree.get(node).children.is_empty() {
            node
        } else {
            tree.random_child(node, &mut self.rng)
        };
        let winner = self.simulate(tree, explore, me);

        self.backpropagate(tree, explore, winner);
    }

    fn expand(&mut self, tree: &mut SearchTree, node: NodeId, drawn: Card) {
        let state = tree.get(node).state.clone();
        for action in state.legal_actions(drawn) {
            let mut child_state = state.clone();
            if child_state.apply(&action, drawn).is_err() {
                continue;
            }
            tree.alloc_child(node, SearchNode::child(node, child_state, action));
            self.stats.nodes_expanded += 1;
        }
    }

    /// Roll the node's state out to a winner.
    ///
    /// A round that is already decided before any rollout turn means the
    /// branch leading here is settled: when the decided winner is not the
    /// searching player, the node's parent is a proven loss and gets the
    /// pruning sentinel.
    fn simulate(&mut self, tree: &mut SearchTree, node: NodeId, me: PlayerId) -> PlayerId {
        self.stats.rollouts += 1;

        if let Some(winner) = tree.get(node).state.round_winner() {
            if winner != me {
                let parent = tree.get(node).parent;
                if !parent.is_none() && !tree.get(parent).is_pruned() {
                    tree.get_mut(parent).prune();
                    self.stats.pruned += 1;
                }
            }
            return winner;
        }

        let mut rollout_rng = self.rng.fork();
        self.rollout.rollout(&tree.get(node).state, &mut rollout_rng)
    }

    /// Walk back to the root. Visits always increment; the win reward only
    /// lands on nodes whose player to move is the rollout's winner.
    fn backpropagate(&mut self, tree: &mut SearchTree, from: NodeId, winner: PlayerId) {
        let mut node = from;
        loop {
            let wins = tree.get(node).state.current_player() == winner;
            let n = tree.get_mut(node);
            n.increment_visit();
            if wins {
                n.add_score(self.config.win_score);
            }
            let parent = n.parent;
            if parent.is_none() {
                break;
            }
            node = parent;
        }
    }

    fn fallback(&mut self, view: &PlayerView, drawn: Card) -> Action {
        log::warn!(
            "search for {} expanded nothing within budget, playing at random",
            view.me
        );
        view.random_action(drawn, &mut self.rng)
            .unwrap_or_else(|| Action::discard(view.me, drawn))
    }
}

impl std::fmt::Debug for MCTSSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MCTSSearch")
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
