//! Shared frontier-expansion loop and the reachability maps it produces.

use std::hash::Hash;

use crate::Cost;
use crate::config::SearchConfig;
use crate::expand::expand;
use crate::node::{Node, NodeArena, NodeId, PathResult};
use crate::queue::NodeQueue;

/// What a freshly admitted node is queued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Priority {
    /// Every node gets 0; pop order is plain FIFO (breadth-first).
    Constant,
    /// Nodes are popped by given cost (Dijkstra).
    GivenCost,
}

impl Priority {
    fn of<E>(self, node: &Node<E>) -> Cost {
        match self {
            Self::Constant => 0.0,
            Self::GivenCost => node.given_cost,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Constant => "bfs",
            Self::GivenCost => "dijkstra",
        }
    }
}

/// Run the frontier loop from the configuration's start element.
///
/// The first pop for which `goal` holds stops the search. Every expanded
/// neighbor that is not yet in the map and passes `admit` is queued and
/// recorded with the popped node as its parent. First discovery wins: an
/// element's cost and parent never change once it is in the map.
pub(crate) fn build_map<E, G, A>(
    config: &SearchConfig<'_, E>,
    policy: Priority,
    mut goal: G,
    admit: A,
) -> ReachabilityMap<E>
where
    E: Eq + Hash + Clone,
    G: FnMut(&E) -> bool,
    A: Fn(&Node<E>) -> bool,
{
    let mut arena = NodeArena::new();
    let mut queue = NodeQueue::new();
    let root = arena.insert(Node::root(config.start().clone()));
    queue.insert(&mut arena.nodes, root, 0.0);

    let mut expansions = 0;
    let mut truncated = false;
    let mut reached = None;

    while let Some(ci) = queue.pop(&mut arena.nodes) {
        if goal(&arena.nodes[ci].element) {
            reached = Some(ci);
            break;
        }
        if config.exhausted(expansions) {
            log::warn!(
                "{} map: expansion limit {} reached with {} open nodes",
                policy.name(),
                expansions,
                queue.len()
            );
            truncated = true;
            break;
        }
        expansions += 1;

        let mut admitted = 0;
        for child in expand(config, &arena, ci) {
            if arena.id_of(&child.element).is_some() || !admit(&child) {
                continue;
            }
            let priority = policy.of(&child);
            let id = arena.insert(child);
            queue.insert(&mut arena.nodes, id, priority);
            admitted += 1;
        }
        log::trace!("{} map: node {ci} admitted {admitted} children", policy.name());
    }

    let outcome = if reached.is_some() {
        "goal reached"
    } else if queue.is_empty() {
        "frontier exhausted"
    } else {
        "stopped early"
    };
    log::debug!(
        "{} map: {} elements, {} expansions, {}",
        policy.name(),
        arena.len(),
        expansions,
        outcome
    );

    ReachabilityMap {
        arena,
        reached,
        expansions,
        truncated,
    }
}

/// Every element discovered by a map build, each with the element it was
/// discovered from.
///
/// The start element is always present and has no parent.
#[derive(Debug, Clone)]
pub struct ReachabilityMap<E> {
    arena: NodeArena<E>,
    reached: Option<NodeId>,
    expansions: usize,
    truncated: bool,
}

impl<E: Eq + Hash + Clone> ReachabilityMap<E> {
    /// The element the map was built from.
    pub fn start(&self) -> &E {
        &self.arena.nodes[0].element
    }

    /// Number of discovered elements, the start included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always `false`: the start element is always in the map.
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Whether `e` was discovered.
    pub fn contains(&self, e: &E) -> bool {
        self.arena.id_of(e).is_some()
    }

    /// The element `e` was discovered from. `None` for the start and for
    /// elements not in the map.
    pub fn parent_of(&self, e: &E) -> Option<&E> {
        let id = self.arena.id_of(e)?;
        let parent = self.arena.nodes[id].parent?;
        Some(&self.arena.nodes[parent].element)
    }

    /// Given cost of `e` along its discovery path.
    pub fn cost_of(&self, e: &E) -> Option<Cost> {
        self.arena.id_of(e).map(|id| self.arena.nodes[id].given_cost)
    }

    /// Path from the start to `e` through discovery parents.
    pub fn path_to(&self, e: &E) -> Option<PathResult<E>> {
        self.arena.id_of(e).map(|id| self.arena.result(id))
    }

    /// Discovered elements, in discovery order.
    pub fn elements(&self) -> impl Iterator<Item = &E> + '_ {
        self.arena.nodes.iter().map(|n| &n.element)
    }

    /// `(element, parent)` pairs, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, Option<&E>)> + '_ {
        self.arena.nodes.iter().map(|n| {
            let parent = n.parent.map(|p| &self.arena.nodes[p].element);
            (&n.element, parent)
        })
    }

    /// The element that satisfied the goal predicate, if the build stopped
    /// on one.
    pub fn goal(&self) -> Option<&E> {
        self.reached.map(|id| &self.arena.nodes[id].element)
    }

    /// Number of nodes whose neighbors were expanded.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Whether the configured expansion limit cut the build short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    #[cfg(test)]
    pub(crate) fn arena(&self) -> &NodeArena<E> {
        &self.arena
    }
}

impl<E: Eq + Hash + Clone> SearchConfig<'_, E> {
    /// Breadth-first map of everything reachable from the start.
    ///
    /// All nodes are queued with the same priority, so this only answers
    /// connectivity: costs are those of the first-discovered route, not
    /// necessarily the cheapest.
    pub fn bfs_map(&self) -> ReachabilityMap<E> {
        build_map(self, Priority::Constant, |_| false, |_| true)
    }

    /// Breadth-first map that stops as soon as an element satisfying `goal`
    /// is popped.
    pub fn bfs_map_until(&self, goal: impl FnMut(&E) -> bool) -> ReachabilityMap<E> {
        build_map(self, Priority::Constant, goal, |_| true)
    }

    /// Cost-ordered map from the start. When a range is configured, only
    /// elements with a given cost within it are admitted.
    pub fn dijkstra_map(&self) -> ReachabilityMap<E> {
        self.dijkstra_map_until(|_| false)
    }

    /// Cost-ordered map that stops as soon as an element satisfying `goal`
    /// is popped.
    pub fn dijkstra_map_until(&self, goal: impl FnMut(&E) -> bool) -> ReachabilityMap<E> {
        let range = self.range();
        build_map(self, Priority::GivenCost, goal, |n| {
            range.is_none_or(|r| n.given_cost <= r)
        })
    }
}
