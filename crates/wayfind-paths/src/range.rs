//! Bounded-cost exploration around the start element.

use std::collections::HashMap;
use std::hash::Hash;

use crate::Cost;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::frontier::ReachabilityMap;
use crate::node::PathResult;

/// Everything reachable from the start within a cost budget.
///
/// Built by [`SearchConfig::range_search`] from a single cost-ordered map
/// build. Every view below is derived from that one map, so they always
/// agree on which elements are in range. The start element is always
/// included, at cost 0.
#[derive(Debug, Clone)]
pub struct RangeSearch<E> {
    map: ReachabilityMap<E>,
    range: Cost,
}

impl<E: Eq + Hash + Clone> RangeSearch<E> {
    /// The cost budget used.
    pub fn range(&self) -> Cost {
        self.range
    }

    /// Reachable elements, in discovery order.
    pub fn elements(&self) -> Vec<E> {
        self.map.elements().cloned().collect()
    }

    /// Cost of reaching each element.
    pub fn costs_by_element(&self) -> HashMap<E, Cost> {
        self.map
            .elements()
            .filter_map(|e| Some((e.clone(), self.map.cost_of(e)?)))
            .collect()
    }

    /// Path to each element.
    pub fn paths_by_element(&self) -> HashMap<E, PathResult<E>> {
        self.map
            .elements()
            .filter_map(|e| Some((e.clone(), self.map.path_to(e)?)))
            .collect()
    }

    /// Number of reachable elements.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Always `false`: the start element is always in range.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `e` is within range.
    pub fn contains(&self, e: &E) -> bool {
        self.map.contains(e)
    }

    /// Cost of reaching `e`, or `None` if it is out of range.
    pub fn cost_at(&self, e: &E) -> Option<Cost> {
        self.map.cost_of(e)
    }

    /// Path to `e`, or `None` if it is out of range.
    pub fn path_to(&self, e: &E) -> Option<PathResult<E>> {
        self.map.path_to(e)
    }

    /// The underlying reachability map.
    pub fn map(&self) -> &ReachabilityMap<E> {
        &self.map
    }
}

impl<E: Eq + Hash + Clone> SearchConfig<'_, E> {
    /// Explore every element whose cost from the start is within the
    /// configured range.
    ///
    /// # Errors
    ///
    /// [`SearchError::MissingRange`] if no range was configured.
    pub fn range_search(&self) -> Result<RangeSearch<E>, SearchError> {
        let range = self.range().ok_or(SearchError::MissingRange)?;
        let map = self.dijkstra_map();
        log::debug!("range search: {} elements within {range}", map.len());
        Ok(RangeSearch { map, range })
    }
}
