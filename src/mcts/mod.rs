//! Determinized Monte Carlo tree search.
//!
//! The searcher never looks at hidden information. Each decision samples a
//! complete world consistent with the player's observation
//! ([`determinize`]), then runs plain UCT over it: UCB1 selection, full
//! expansion of the legal actions, uniformly-random rollouts, and
//! backpropagation that rewards the nodes whose player to move won the
//! rollout. The returned action is the robust child's (most visits).

pub mod agent;
pub mod config;
pub mod determinize;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

pub use agent::MCTSAgent;
pub use config::MCTSConfig;
pub use determinize::determinize;
pub use node::{NodeId, SearchNode};
pub use policy::{RandomRollout, RolloutPolicy, SelectionPolicy, UCB1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::SearchTree;
