//! Small directed graphs for unit tests.

use std::collections::HashMap;

use crate::Cost;
use crate::config::{SearchConfig, SearchConfigBuilder};

/// Directed graph over `char` labels. One distance table serves both edge
/// lengths and heuristic estimates; unknown pairs are 0.
#[derive(Debug, Default)]
pub(crate) struct Graph {
    adj: HashMap<char, Vec<char>>,
    dist: HashMap<(char, char), Cost>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn edge(mut self, from: char, to: char, cost: Cost) -> Self {
        self.adj.entry(from).or_default().push(to);
        self.dist.insert((from, to), cost);
        self
    }

    /// Set the distance for a pair that is not an edge (heuristic only).
    pub(crate) fn estimate(mut self, from: char, to: char, cost: Cost) -> Self {
        self.dist.insert((from, to), cost);
        self
    }

    pub(crate) fn dist(&self, from: char, to: char) -> Cost {
        self.dist.get(&(from, to)).copied().unwrap_or(0.0)
    }

    pub(crate) fn succ(&self, e: char) -> Vec<char> {
        self.adj.get(&e).cloned().unwrap_or_default()
    }

    pub(crate) fn config(&self, start: char) -> SearchConfigBuilder<'_, char> {
        SearchConfig::builder(start)
            .distance(move |a: &char, b: &char| self.dist(*a, *b))
            .neighbors(move |e: &char| self.succ(*e))
    }
}
