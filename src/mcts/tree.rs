//! Arena-based search tree.
//!
//! Nodes live in a flat `Vec` and reference each other by `NodeId`, so
//! parent links and child lists are plain indices. The whole tree is built
//! for one decision and discarded afterwards; `promote` supports handing a
//! chosen child back as the new root on the way out.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::game::RoundState;

use super::node::{NodeId, SearchNode};

/// Arena-based search tree with a single root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTree {
    /// All nodes, in allocation order.
    nodes: Vec<SearchNode>,

    /// The current root.
    root: NodeId,
}

impl SearchTree {
    /// Create a tree whose root holds a determinized state.
    #[must_use]
    pub fn new(root_state: RoundState) -> Self {
        Self {
            nodes: vec![SearchNode::root(root_state)],
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a child of `parent` and link it into the child list.
    pub fn alloc_child(&mut self, parent: NodeId, node: SearchNode) -> NodeId {
        let id = self.alloc(node);
        self.get_mut(parent).children.push(id);
        id
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty (never true: a tree always has a root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// A uniformly-random child of `id`. The node must have children.
    #[must_use]
    pub fn random_child(&self, id: NodeId, rng: &mut GameRng) -> NodeId {
        let children = &self.get(id).children;
        debug_assert!(!children.is_empty(), "random_child on a leaf");
        children[rng.gen_range_usize(0..children.len())]
    }

    /// The most-visited child of `id` (robust child), or `None` on a leaf.
    ///
    /// Visit count, not average score: the most-explored branch is the
    /// least variance-sensitive final pick.
    #[must_use]
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)
            .children
            .iter()
            .copied()
            .max_by_key(|&c| self.get(c).visits)
    }

    /// Reassign the root to one of its children, abandoning the rest of the
    /// old root's subtree (the arena keeps the memory until the tree is
    /// dropped).
    pub fn promote(&mut self, child: NodeId) {
        debug_assert!(self.get(self.root).children.contains(&child));
        self.get_mut(child).parent = NodeId::NONE;
        self.root = child;
    }
}
