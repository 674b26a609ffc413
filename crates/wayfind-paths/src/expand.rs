use std::hash::Hash;

use crate::config::SearchConfig;
use crate::node::{Node, NodeArena, NodeId};

/// Turn node `parent` into candidate child nodes.
///
/// Candidates come from the neighbor function in emission order. The
/// element `parent` was reached from is skipped (no immediate backtracking),
/// as is anything the traversability chain rejects. Each child costs
/// `g(parent) + distance(parent, child) * traversal_cost(child)`.
///
/// The children are not stored in the arena; the caller decides which ones
/// to admit. An empty result is a dead end, not an error.
pub(crate) fn expand<E>(
    config: &SearchConfig<'_, E>,
    arena: &NodeArena<E>,
    parent: NodeId,
) -> Vec<Node<E>>
where
    E: Eq + Hash + Clone,
{
    let node = &arena.nodes[parent];
    let came_from = node.parent.map(|gp| &arena.nodes[gp].element);

    config
        .neighbors(&node.element)
        .into_iter()
        .filter(|c| came_from != Some(c))
        .filter(|c| config.traversability(c).is_valid())
        .map(|c| {
            let traversal = config.traversal_cost(&c);
            let edge = config.distance(&node.element, &c);
            let given = node.given_cost + edge * traversal;
            Node::child(c, Some(parent), given)
        })
        .collect()
}
