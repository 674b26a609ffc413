//! Search configuration and its validating builder.

use std::fmt;

use crate::Cost;
use crate::error::SearchError;
use crate::traits::Pather;

// Callbacks are `Send + Sync` so one configuration can serve searches on
// several threads at once.
type DistanceFn<'a, E> = Box<dyn Fn(&E, &E) -> Cost + Send + Sync + 'a>;
type CostFn<'a, E> = Box<dyn Fn(&E) -> Cost + Send + Sync + 'a>;
type TraversabilityFn<'a, E> = Box<dyn Fn(&E) -> Traversability + Send + Sync + 'a>;
type NeighborFn<'a, E> = Box<dyn Fn(&E) -> Vec<E> + Send + Sync + 'a>;

/// Outcome of a traversability check for a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversability {
    /// The element can be entered.
    #[default]
    Valid,
    /// Temporarily taken by something else.
    Occupied,
    /// Permanently obstructed.
    Blocked,
    /// Not part of the search space.
    Invalid,
}

impl Traversability {
    /// Whether the element can be entered.
    #[inline]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

/// Everything a search needs to know about the element space.
///
/// Built with [`SearchConfig::builder`]. The distance and neighbor functions
/// are required; the traversal cost defaults to 1 and an empty
/// traversability chain accepts everything.
///
/// Every search allocates its own nodes and queue, so a configuration is
/// never mutated by a search. It is `Send` and `Sync` whenever `E` is, and
/// any number of threads may search from one shared configuration.
///
/// # Examples
///
/// ```
/// use wayfind_paths::SearchConfig;
///
/// // Walk along the integers, one unit per step.
/// let config = SearchConfig::builder(0i32)
///     .target(5)
///     .distance(|a: &i32, b: &i32| (a - b).abs() as f64)
///     .neighbors(|n: &i32| vec![n - 1, n + 1])
///     .build()
///     .unwrap();
///
/// let path = config.astar_path().unwrap().unwrap();
/// assert_eq!(path.path, vec![0, 1, 2, 3, 4, 5]);
/// assert_eq!(path.cost, 5.0);
/// ```
pub struct SearchConfig<'a, E> {
    start: E,
    target: Option<E>,
    range: Option<Cost>,
    distance: DistanceFn<'a, E>,
    traversal_cost: Option<CostFn<'a, E>>,
    traversability: Vec<TraversabilityFn<'a, E>>,
    neighbors: NeighborFn<'a, E>,
    max_expansions: Option<usize>,
}

impl<'a, E> SearchConfig<'a, E> {
    /// Start building a configuration rooted at `start`.
    pub fn builder(start: E) -> SearchConfigBuilder<'a, E> {
        SearchConfigBuilder::new(start)
    }

    /// The element every search starts from.
    #[inline]
    pub fn start(&self) -> &E {
        &self.start
    }

    /// The goal of a path search, if any.
    #[inline]
    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }

    /// The cost budget of a range search, if any.
    #[inline]
    pub fn range(&self) -> Option<Cost> {
        self.range
    }

    /// Upper bound on expanded nodes, if any.
    #[inline]
    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    #[inline]
    pub(crate) fn distance(&self, from: &E, to: &E) -> Cost {
        (self.distance)(from, to)
    }

    #[inline]
    pub(crate) fn traversal_cost(&self, e: &E) -> Cost {
        self.traversal_cost.as_ref().map_or(1.0, |f| f(e))
    }

    /// Run the traversability chain; the first non-valid answer wins.
    pub(crate) fn traversability(&self, e: &E) -> Traversability {
        self.traversability
            .iter()
            .map(|f| f(e))
            .find(|t| !t.is_valid())
            .unwrap_or(Traversability::Valid)
    }

    #[inline]
    pub(crate) fn neighbors(&self, e: &E) -> Vec<E> {
        (self.neighbors)(e)
    }

    /// Whether the expansion budget is spent after `expanded` expansions.
    #[inline]
    pub(crate) fn exhausted(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}

impl<E: fmt::Debug> fmt::Debug for SearchConfig<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("start", &self.start)
            .field("target", &self.target)
            .field("range", &self.range)
            .field("traversability_checks", &self.traversability.len())
            .field("max_expansions", &self.max_expansions)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SearchConfig`].
pub struct SearchConfigBuilder<'a, E> {
    start: E,
    target: Option<E>,
    range: Option<Cost>,
    distance: Option<DistanceFn<'a, E>>,
    traversal_cost: Option<CostFn<'a, E>>,
    traversability: Vec<TraversabilityFn<'a, E>>,
    neighbors: Option<NeighborFn<'a, E>>,
    max_expansions: Option<usize>,
}

impl<'a, E> SearchConfigBuilder<'a, E> {
    /// Empty builder rooted at `start`. Same as [`SearchConfig::builder`].
    pub fn new(start: E) -> Self {
        Self {
            start,
            target: None,
            range: None,
            distance: None,
            traversal_cost: None,
            traversability: Vec::new(),
            neighbors: None,
            max_expansions: None,
        }
    }

    /// Goal element for [`SearchConfig::astar_path`].
    pub fn target(mut self, target: E) -> Self {
        self.target = Some(target);
        self
    }

    /// Cost budget for [`SearchConfig::range_search`].
    pub fn range(mut self, range: Cost) -> Self {
        self.range = Some(range);
        self
    }

    /// Edge length between adjacent elements, also used as the path-search
    /// heuristic towards the target.
    pub fn distance(
        mut self,
        f: impl Fn(&E, &E) -> Cost + Send + Sync + 'a,
    ) -> Self {
        self.distance = Some(Box::new(f));
        self
    }

    /// Multiplier applied to the distance when entering an element.
    pub fn traversal_cost(mut self, f: impl Fn(&E) -> Cost + Send + Sync + 'a) -> Self {
        self.traversal_cost = Some(Box::new(f));
        self
    }

    /// Append a check to the traversability chain. Checks run in the order
    /// they were added.
    pub fn traversability(
        mut self,
        f: impl Fn(&E) -> Traversability + Send + Sync + 'a,
    ) -> Self {
        self.traversability.push(Box::new(f));
        self
    }

    /// Candidate successors of an element.
    pub fn neighbors(mut self, f: impl Fn(&E) -> Vec<E> + Send + Sync + 'a) -> Self {
        self.neighbors = Some(Box::new(f));
        self
    }

    /// Stop a search after expanding `n` nodes.
    pub fn max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Take every function from a [`Pather`].
    ///
    /// Replaces any distance, traversal cost and neighbor function set so
    /// far, and appends the pather's traversability check to the chain.
    pub fn pather<P>(self, pather: &'a P) -> Self
    where
        P: Pather<Element = E> + Sync,
        E: 'a,
    {
        self.distance(move |a, b| pather.distance(a, b))
            .traversal_cost(move |e| pather.traversal_cost(e))
            .traversability(move |e| pather.traversability(e))
            .neighbors(move |e| pather.neighbors(e))
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<SearchConfig<'a, E>, SearchError> {
        let distance = self.distance.ok_or(SearchError::MissingDistance)?;
        let neighbors = self.neighbors.ok_or(SearchError::MissingNeighbors)?;
        if let Some(r) = self.range {
            if r.is_nan() || r < 0.0 {
                return Err(SearchError::InvalidRange(r));
            }
        }
        if self.max_expansions == Some(0) {
            return Err(SearchError::ZeroExpansionLimit);
        }
        Ok(SearchConfig {
            start: self.start,
            target: self.target,
            range: self.range,
            distance,
            traversal_cost: self.traversal_cost,
            traversability: self.traversability,
            neighbors,
            max_expansions: self.max_expansions,
        })
    }
}
