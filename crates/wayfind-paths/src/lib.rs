//! Generic graph search over caller-defined element spaces.
//!
//! The engine never looks inside an element: it only needs equality,
//! hashing, and the functions collected in a [`SearchConfig`]:
//!
//! - a **distance** between two elements (edge length and A* heuristic),
//! - a **neighbor** function listing candidate successors,
//! - an optional per-element **traversal cost** multiplier,
//! - an ordered chain of **traversability** checks.
//!
//! On top of one node/priority-queue core it provides:
//!
//! - **A\*** shortest-path search ([`SearchConfig::astar_path`])
//! - **Range search** of everything within a cost budget
//!   ([`SearchConfig::range_search`], [`RangeSearch`])
//! - **Dijkstra** and **BFS** reachability maps ([`SearchConfig::dijkstra_map`],
//!   [`SearchConfig::bfs_map`], [`ReachabilityMap`])
//! - **Connectivity** queries ([`SearchConfig::reachable`],
//!   [`SearchConfig::is_connected`])
//!
//! Every call allocates its own nodes and drops them on return; nothing is
//! cached between calls.
//!
//! # Grids
//!
//! [`GridPather`] adapts a [`wayfind_core::TerrainGrid`] through the
//! [`Pather`] trait, with [`Connectivity`] choosing 4-, 8- or 6-way moves and
//! [`manhattan`], [`chebyshev`] and [`euclidean`] as ready-made distances.

mod astar;
mod cc;
mod config;
mod distance;
mod error;
mod expand;
mod frontier;
mod neighbors;
mod node;
mod queue;
mod range;
mod terrain;
mod traits;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod testutil;

/// Cost of moving through the element space.
pub type Cost = f64;

pub use config::{SearchConfig, SearchConfigBuilder, Traversability};
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::SearchError;
pub use frontier::ReachabilityMap;
pub use neighbors::{Connectivity, all, cardinal, orthogonal};
pub use node::PathResult;
pub use range::RangeSearch;
pub use terrain::{GridPather, terrain_traversability};
pub use traits::Pather;
