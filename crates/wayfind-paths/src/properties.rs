//! Randomized checks of the search guarantees on small terrain grids.

use proptest::prelude::*;
use wayfind_core::{Point, Terrain, TerrainGrid};

use crate::{Connectivity, Cost, GridPather, Pather, SearchConfig};

fn grid_strategy() -> impl Strategy<Value = (TerrainGrid, Point, Point)> {
    (2i32..9, 2i32..9).prop_flat_map(|(w, h)| {
        let n = (w * h) as usize;
        (
            prop::collection::vec(0u8..10, n),
            0..n,
            0..n,
        )
            .prop_map(move |(cells, s, t)| {
                let mut grid = TerrainGrid::new(w, h);
                for (p, c) in grid.bounds().iter().zip(cells) {
                    let terrain = match c {
                        0..=2 => Terrain::Wall,
                        3 => Terrain::Rough,
                        _ => Terrain::Floor,
                    };
                    grid.set(p, terrain);
                }
                let at = |i: usize| Point::flat(i as i32 % w, i as i32 / w);
                let (start, target) = (at(s), at(t));
                grid.set(start, Terrain::Floor);
                (grid, start, target)
            })
    })
}

/// Checks that `path` is contiguous under the pather and returns its cost.
fn walk(pather: &GridPather<'_>, path: &[Point]) -> Cost {
    let mut cost = 0.0;
    for w in path.windows(2) {
        assert!(pather.neighbors(&w[0]).contains(&w[1]), "{} -> {}", w[0], w[1]);
        cost += pather.distance(&w[0], &w[1]) * pather.traversal_cost(&w[1]);
    }
    cost
}

proptest! {
    #[test]
    fn range_results_are_consistent((grid, start, _) in grid_strategy(), range in 0.0f64..12.0) {
        let pather = GridPather::new(&grid, Connectivity::Cardinal);
        let config = SearchConfig::builder(start)
            .range(range)
            .pather(&pather)
            .build()
            .unwrap();
        let search = config.range_search().unwrap();
        let costs = search.costs_by_element();
        let paths = search.paths_by_element();

        prop_assert_eq!(costs.len(), search.len());
        prop_assert_eq!(paths.len(), search.len());
        prop_assert_eq!(costs.get(&start).copied(), Some(0.0));
        for (p, r) in &paths {
            prop_assert!(costs[p] <= range);
            prop_assert_eq!(r.path.first(), Some(&start));
            prop_assert_eq!(r.path.last(), Some(p));
            prop_assert_eq!(walk(&pather, &r.path), costs[p]);
        }
    }

    #[test]
    fn astar_paths_are_valid((grid, start, target) in grid_strategy()) {
        let pather = GridPather::new(&grid, Connectivity::Cardinal);
        let config = SearchConfig::builder(start)
            .target(target)
            .range(Cost::INFINITY)
            .pather(&pather)
            .build()
            .unwrap();

        let found = config.astar_path().unwrap();
        prop_assert_eq!(found.is_some(), config.is_connected(&target));

        if let Some(r) = found {
            prop_assert_eq!(r.path.first(), Some(&start));
            prop_assert_eq!(r.path.last(), Some(&target));
            prop_assert_eq!(walk(&pather, &r.path), r.cost);
            // Entering a cell always costs the same, so the first-discovery
            // cost of the cost-ordered map is optimal too.
            let search = config.range_search().unwrap();
            prop_assert_eq!(search.cost_at(&target), Some(r.cost));
        }
    }

    #[test]
    fn searches_are_deterministic((grid, start, target) in grid_strategy()) {
        let pather = GridPather::new(&grid, Connectivity::Diagonal);
        let config = SearchConfig::builder(start)
            .target(target)
            .range(6.0)
            .pather(&pather)
            .build()
            .unwrap();

        prop_assert_eq!(config.astar_path().unwrap(), config.astar_path().unwrap());
        let a = config.range_search().unwrap();
        let b = config.range_search().unwrap();
        prop_assert_eq!(a.elements(), b.elements());
        prop_assert_eq!(a.paths_by_element(), b.paths_by_element());
    }

    #[test]
    fn zero_range_is_start_only((grid, start, _) in grid_strategy()) {
        let pather = GridPather::new(&grid, Connectivity::Orthogonal);
        let config = SearchConfig::builder(start)
            .range(0.0)
            .pather(&pather)
            .build()
            .unwrap();
        let search = config.range_search().unwrap();
        prop_assert_eq!(search.elements(), vec![start]);
    }
}
