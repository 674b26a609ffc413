use std::collections::HashMap;
use std::hash::Hash;

use crate::Cost;

/// Index of a [`Node`] inside its [`NodeArena`].
pub(crate) type NodeId = usize;

/// Search status of a node. Only ever moves forward:
/// `Unexplored → Open → Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum NodeStatus {
    /// Discovered but never queued.
    Unexplored,
    /// Waiting in the priority queue.
    Open,
    /// Popped; its neighbors have been (or are being) expanded.
    Closed,
}

/// Per-discovery record for one element in one search run.
#[derive(Debug, Clone)]
pub(crate) struct Node<E> {
    pub(crate) element: E,
    pub(crate) parent: Option<NodeId>,
    pub(crate) status: NodeStatus,
    /// Accumulated cost from the start (g).
    pub(crate) given_cost: Cost,
    /// g plus heuristic (f). Equal to `given_cost` outside of path search.
    pub(crate) total_cost: Cost,
    /// Priority of the node's live queue entry.
    pub(crate) priority: Cost,
}

impl<E> Node<E> {
    /// The root node of a search.
    pub(crate) fn root(element: E) -> Self {
        Self::child(element, None, 0.0)
    }

    /// A freshly discovered node, not yet queued.
    pub(crate) fn child(element: E, parent: Option<NodeId>, given_cost: Cost) -> Self {
        Self {
            element,
            parent,
            status: NodeStatus::Unexplored,
            given_cost,
            total_cost: given_cost,
            priority: given_cost,
        }
    }
}

/// Owns every node of a single search run. Parents are arena indices, so
/// path reconstruction is an index walk.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<E> {
    pub(crate) nodes: Vec<Node<E>>,
    index: HashMap<E, NodeId>,
}

impl<E: Eq + Hash + Clone> NodeArena<E> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Store `node` and return its id. The element must not already be
    /// present; each element gets exactly one node per run.
    pub(crate) fn insert(&mut self, node: Node<E>) -> NodeId {
        let id = self.nodes.len();
        debug_assert!(!self.index.contains_key(&node.element));
        self.index.insert(node.element.clone(), id);
        self.nodes.push(node);
        id
    }

    pub(crate) fn id_of(&self, element: &E) -> Option<NodeId> {
        self.index.get(element).copied()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Elements from the root to `id`, inclusive.
    pub(crate) fn path_to(&self, id: NodeId) -> Vec<E> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        // Negative edge costs can close a parent cycle.
        for _ in 0..self.nodes.len() {
            let Some(ci) = cur else { break };
            path.push(self.nodes[ci].element.clone());
            cur = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    /// Build the public result for node `id`.
    pub(crate) fn result(&self, id: NodeId) -> PathResult<E> {
        let node = &self.nodes[id];
        PathResult {
            element: node.element.clone(),
            cost: node.given_cost,
            path: self.path_to(id),
        }
    }
}

/// A reached element together with its cost and the path leading to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult<E> {
    /// The element that was reached.
    pub element: E,
    /// Cumulative cost from the start.
    pub cost: Cost,
    /// Elements from the start to `element`, both inclusive.
    pub path: Vec<E>,
}

impl<E> PathResult<E> {
    /// Number of steps (edges) on the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
