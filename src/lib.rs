//! # loveletter
//!
//! A Love Letter engine with a determinized-MCTS player.
//!
//! ## Design Principles
//!
//! 1. **Hidden Information Stays Hidden**: Agents only ever receive a
//!    [`game::PlayerView`]; the authoritative [`game::RoundState`] never
//!    crosses the agent boundary.
//!
//! 2. **One Legality Oracle**: Expansion, rollouts, and agents all enumerate
//!    moves through the same `game::legal` functions the engine validates
//!    with, so nobody can disagree about what is playable.
//!
//! 3. **Determinize, Then Search Perfect Information**: Each decision
//!    samples one complete deal consistent with the observation and runs
//!    plain UCT over it under a wall-clock budget.
//!
//! ## Modules
//!
//! - `core`: cards, players, actions, errors, RNG
//! - `game`: the rules engine (`RoundState`), legality, player views
//! - `agents`: the `Agent` trait plus random and reflex baselines
//! - `mcts`: the search stack (determinizer, tree, policies, driver)
//! - `arena`: the game loop and tournament harness

pub mod agents;
pub mod arena;
pub mod core;
pub mod game;
pub mod mcts;

// Re-export commonly used types
pub use crate::core::{Action, Card, GameRng, IllegalAction, PlayerId, PlayerMap};

pub use crate::game::{PlayerView, RoundState};

pub use crate::agents::{Agent, RandomAgent, ReflexAgent};

pub use crate::mcts::{
    determinize, MCTSAgent, MCTSConfig, MCTSSearch, NodeId, RandomRollout, RolloutPolicy,
    SearchNode, SearchStats, SearchTree, SelectionPolicy, UCB1,
};

pub use crate::arena::{tokens_to_win, Arena, GameOutcome};
