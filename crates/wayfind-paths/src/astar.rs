use std::hash::Hash;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::expand::expand;
use crate::node::{Node, NodeArena, NodeStatus, PathResult};
use crate::queue::NodeQueue;

impl<E: Eq + Hash + Clone> SearchConfig<'_, E> {
    /// Compute a path from the start to the target using A*.
    ///
    /// The heuristic is `distance(element, target)`. Returns the full path
    /// (including both endpoints) or `Ok(None)` if the target cannot be
    /// reached, or the expansion limit was hit first.
    ///
    /// A node that is already closed keeps any cheaper cost found later but
    /// is not reopened, so with an inconsistent heuristic the reported cost
    /// may exceed the optimum. Its descendants keep the costs they were
    /// given through the old route, so the reported cost can then also
    /// differ from the sum of the edges along the returned path.
    ///
    /// On an infinite element space an unreachable target is searched for
    /// forever unless [`max_expansions`](crate::SearchConfigBuilder::max_expansions)
    /// is set.
    ///
    /// # Errors
    ///
    /// [`SearchError::MissingTarget`] if no target was configured.
    pub fn astar_path(&self) -> Result<Option<PathResult<E>>, SearchError> {
        let target = self.target().ok_or(SearchError::MissingTarget)?;

        let mut arena = NodeArena::new();
        let mut open = NodeQueue::new();

        let mut root = Node::root(self.start().clone());
        root.total_cost = self.distance(self.start(), target);
        let start_f = root.total_cost;
        let start_idx = arena.insert(root);
        open.insert(&mut arena.nodes, start_idx, start_f);

        let mut expansions = 0;

        let found = 'search: loop {
            let Some(ci) = open.pop(&mut arena.nodes) else {
                break 'search None;
            };

            if arena.nodes[ci].element == *target {
                break 'search Some(ci);
            }

            if self.exhausted(expansions) {
                log::warn!(
                    "astar: expansion limit {} reached with {} open nodes",
                    expansions,
                    open.len()
                );
                break 'search None;
            }
            expansions += 1;
            log::trace!("astar: expanding node {ci} (f = {})", arena.nodes[ci].total_cost);

            for child in expand(self, &arena, ci) {
                let f = child.given_cost + self.distance(&child.element, target);

                match arena.id_of(&child.element) {
                    None => {
                        let mut child = child;
                        child.total_cost = f;
                        let ni = arena.insert(child);
                        open.insert(&mut arena.nodes, ni, f);
                    }
                    Some(ni) => {
                        let n = &mut arena.nodes[ni];
                        if f >= n.total_cost {
                            continue;
                        }
                        n.parent = Some(ci);
                        n.given_cost = child.given_cost;
                        n.total_cost = f;
                        if n.status == NodeStatus::Closed {
                            log::trace!("astar: relaxed closed node {ni} to {f}");
                        }
                        // No-op for closed nodes.
                        open.reprioritize(&mut arena.nodes, ni, f);
                    }
                }
            }
        };

        log::debug!(
            "astar: {} nodes, {} expansions, path {}",
            arena.len(),
            expansions,
            if found.is_some() { "found" } else { "not found" }
        );

        Ok(found.map(|ci| arena.result(ci)))
    }
}
