//! **wayfind-core**: geometry and terrain types for the *wayfind* search
//! engine.
//!
//! This crate provides the concrete element space used by the grid helpers
//! in `wayfind-paths`: 3D integer points, half-open boxes, and a layered
//! terrain grid that can be parsed from ASCII maps.

pub mod geom;
pub mod grid;

pub use geom::{Bounds, BoundsIter, Point};
pub use grid::{DEFAULT_ROUGH_COST, GridError, Terrain, TerrainGrid};
