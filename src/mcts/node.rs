//! Search tree node structures.
//!
//! Uses arena-based allocation with index references (`NodeId`): the parent
//! back-reference is an index, not an owning pointer, so the tree needs no
//! reference counting and no ownership cycle.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Action;
use crate::game::RoundState;

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the search tree.
///
/// Holds a determinized state snapshot, the action that produced it, the
/// parent back-reference and visit/score statistics. Children are created
/// once at expansion time and never removed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// Determinized state after `action` was applied (for the root, the
    /// determinized observation itself).
    pub state: RoundState,

    /// The action that produced this state from the parent's (None for the
    /// root).
    pub action: Option<Action>,

    /// Child nodes in expansion order.
    pub children: SmallVec<[NodeId; 8]>,

    /// How many rollout paths have passed through this node.
    pub visits: u32,

    /// Accumulated win score, or `PRUNED` once the branch is written off.
    pub score: f64,
}

impl SearchNode {
    /// Sentinel score marking a branch a rollout proved already lost.
    /// Selection never favors it and score accumulation skips it.
    pub const PRUNED: f64 = f64::NEG_INFINITY;

    /// Create a root node holding a determinized state.
    #[must_use]
    pub fn root(state: RoundState) -> Self {
        Self {
            parent: NodeId::NONE,
            state,
            action: None,
            children: SmallVec::new(),
            visits: 0,
            score: 0.0,
        }
    }

    /// Create a child node for the state produced by `action`.
    #[must_use]
    pub fn child(parent: NodeId, state: RoundState, action: Action) -> Self {
        Self {
            parent,
            state,
            action: Some(action),
            children: SmallVec::new(),
            visits: 0,
            score: 0.0,
        }
    }

    /// Whether this branch has been pruned.
    #[must_use]
    pub fn is_pruned(&self) -> bool {
        self.score == Self::PRUNED
    }

    /// Mark this branch as a proven loss.
    pub fn prune(&mut self) {
        self.score = Self::PRUNED;
    }

    /// Add reward to the accumulated score. No-op on a pruned node: the
    /// sentinel must keep repelling selection.
    pub fn add_score(&mut self, reward: f64) {
        if !self.is_pruned() {
            self.score += reward;
        }
    }

    /// Record one more rollout path through this node.
    pub fn increment_visit(&mut self) {
        self.visits += 1;
    }
}
