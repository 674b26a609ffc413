//! Connectivity queries.

use std::collections::HashSet;
use std::hash::Hash;

use crate::config::SearchConfig;

impl<E: Eq + Hash + Clone> SearchConfig<'_, E> {
    /// Flood-fill from the start and return every connected element,
    /// the start included.
    ///
    /// Uses the breadth-first map, so it terminates only on finite
    /// element spaces (or with an expansion limit).
    pub fn reachable(&self) -> HashSet<E> {
        self.bfs_map().elements().cloned().collect()
    }

    /// Whether `other` can be reached from the start. Stops as soon as it is
    /// found.
    pub fn is_connected(&self, other: &E) -> bool {
        self.bfs_map_until(|e| e == other).goal().is_some()
    }
}
