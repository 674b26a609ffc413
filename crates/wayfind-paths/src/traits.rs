use crate::Cost;
use crate::config::Traversability;

/// An element space described as one type instead of loose closures.
///
/// Plug it into a configuration with
/// [`SearchConfigBuilder::pather`](crate::SearchConfigBuilder::pather).
pub trait Pather {
    /// The element type searched over.
    type Element;

    /// Candidate successors of `e`, in the order they should be tried.
    fn neighbors(&self, e: &Self::Element) -> Vec<Self::Element>;

    /// Edge length between adjacent elements. Also serves as the heuristic
    /// towards the target, so it should never overestimate.
    fn distance(&self, from: &Self::Element, to: &Self::Element) -> Cost;

    /// Multiplier applied when entering `e`.
    fn traversal_cost(&self, _e: &Self::Element) -> Cost {
        1.0
    }

    /// Whether `e` may be entered at all.
    fn traversability(&self, _e: &Self::Element) -> Traversability {
        Traversability::Valid
    }
}
