//! Searching over a [`TerrainGrid`].

use wayfind_core::{Point, Terrain, TerrainGrid};

use crate::Cost;
use crate::config::Traversability;
use crate::neighbors::Connectivity;
use crate::traits::Pather;

impl From<Terrain> for Traversability {
    fn from(t: Terrain) -> Self {
        match t {
            Terrain::Floor | Terrain::Rough => Traversability::Valid,
            Terrain::Occupied => Traversability::Occupied,
            Terrain::Wall => Traversability::Blocked,
            Terrain::Void => Traversability::Invalid,
        }
    }
}

/// Traversability of `p` in `grid`; cells outside the grid are invalid.
pub fn terrain_traversability(grid: &TerrainGrid, p: Point) -> Traversability {
    grid.terrain(p).map_or(Traversability::Invalid, Traversability::from)
}

/// [`Pather`] over the cells of a [`TerrainGrid`].
///
/// Neighbors are limited to the grid's bounds, entering a cell costs its
/// terrain multiplier, and walls, void and occupied cells are not
/// traversable.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'g> {
    grid: &'g TerrainGrid,
    connectivity: Connectivity,
}

impl<'g> GridPather<'g> {
    /// Search `grid`, moving between cells as `connectivity` allows.
    pub fn new(grid: &'g TerrainGrid, connectivity: Connectivity) -> Self {
        Self { grid, connectivity }
    }

    /// The grid being searched.
    pub fn grid(&self) -> &'g TerrainGrid {
        self.grid
    }
}

impl Pather for GridPather<'_> {
    type Element = Point;

    fn neighbors(&self, p: &Point) -> Vec<Point> {
        let mut nbs = self.connectivity.neighbors(*p);
        nbs.retain(|n| self.grid.contains(*n));
        nbs
    }

    fn distance(&self, from: &Point, to: &Point) -> Cost {
        self.connectivity.distance(*from, *to)
    }

    fn traversal_cost(&self, p: &Point) -> Cost {
        self.grid.cost(*p)
    }

    fn traversability(&self, p: &Point) -> Traversability {
        terrain_traversability(self.grid, *p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;

    const MAZE: &str = "
.....
.###.
...#.
.#.#.
.#...
";

    fn pather(grid: &TerrainGrid) -> GridPather<'_> {
        GridPather::new(grid, Connectivity::Cardinal)
    }

    #[test]
    fn terrain_maps_to_traversability() {
        let g = TerrainGrid::parse(".~#@x").unwrap();
        let got: Vec<_> = (0..6)
            .map(|x| terrain_traversability(&g, Point::flat(x, 0)))
            .collect();
        assert_eq!(
            got,
            vec![
                Traversability::Valid,
                Traversability::Valid,
                Traversability::Blocked,
                Traversability::Occupied,
                Traversability::Invalid,
                Traversability::Invalid,
            ]
        );
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let g = TerrainGrid::new(3, 3);
        let p = pather(&g);
        assert_eq!(p.neighbors(&Point::ZERO).len(), 2);
        assert_eq!(p.neighbors(&Point::flat(1, 1)).len(), 4);
    }

    #[test]
    fn path_through_maze() {
        let g = TerrainGrid::parse(MAZE).unwrap();
        let p = pather(&g);
        let config = SearchConfig::builder(Point::flat(0, 4))
            .target(Point::flat(4, 4))
            .pather(&p)
            .build()
            .unwrap();
        let r = config.astar_path().unwrap().unwrap();
        assert_eq!(r.path.first(), Some(&Point::flat(0, 4)));
        assert_eq!(r.path.last(), Some(&Point::flat(4, 4)));
        // Up the left edge, across row 2, down the middle, along the bottom.
        assert_eq!(r.cost, 8.0);
        assert_eq!(r.steps(), 8);
        for w in r.path.windows(2) {
            assert!(p.neighbors(&w[0]).contains(&w[1]));
            assert_eq!(terrain_traversability(&g, w[1]), Traversability::Valid);
        }
    }

    #[test]
    fn walled_off_target() {
        let g = TerrainGrid::parse("..#.\n..#.\n..#.").unwrap();
        let p = pather(&g);
        let config = SearchConfig::builder(Point::ZERO)
            .target(Point::flat(3, 1))
            .pather(&p)
            .build()
            .unwrap();
        assert_eq!(config.astar_path().unwrap(), None);
    }

    #[test]
    fn rough_ground_is_avoided_when_cheaper() {
        let g = TerrainGrid::parse(
            "
.~~~.
.....
",
        )
        .unwrap()
        .with_rough_cost(3.0);
        let p = pather(&g);
        let config = SearchConfig::builder(Point::ZERO)
            .target(Point::flat(4, 0))
            .pather(&p)
            .build()
            .unwrap();
        let r = config.astar_path().unwrap().unwrap();
        // Straight across costs 1 + 3 * 3 = 10; the detour costs 6.
        assert_eq!(r.cost, 6.0);
        assert!(r.path.iter().all(|c| g.terrain(*c) == Some(Terrain::Floor)));
    }

    #[test]
    fn occupied_cells_block_range() {
        let g = TerrainGrid::parse(".@.\n.#.\n...").unwrap();
        let p = pather(&g);
        let config = SearchConfig::builder(Point::ZERO)
            .range(4.0)
            .pather(&p)
            .build()
            .unwrap();
        let search = config.range_search().unwrap();
        assert!(!search.contains(&Point::flat(1, 0)));
        assert!(!search.contains(&Point::flat(1, 1)));
        assert_eq!(search.cost_at(&Point::flat(2, 2)), Some(4.0));
        assert_eq!(search.cost_at(&Point::flat(2, 0)), None);
        assert_eq!(search.len(), 5);
    }

    #[test]
    fn stairs_between_layers() {
        let g = TerrainGrid::parse_layers(&[".##\n###", "...\n##."]).unwrap();
        let p = GridPather::new(&g, Connectivity::Orthogonal);
        let config = SearchConfig::builder(Point::ZERO)
            .target(Point::new(2, 1, 1))
            .pather(&p)
            .build()
            .unwrap();
        let r = config.astar_path().unwrap().unwrap();
        assert_eq!(
            r.path,
            vec![
                Point::new(0, 0, 0),
                Point::new(0, 0, 1),
                Point::new(1, 0, 1),
                Point::new(2, 0, 1),
                Point::new(2, 1, 1),
            ]
        );
    }

    #[test]
    fn diagonal_moves_shorten_paths() {
        let g = TerrainGrid::new(6, 6);
        let p = GridPather::new(&g, Connectivity::Diagonal);
        let config = SearchConfig::builder(Point::ZERO)
            .target(Point::flat(5, 5))
            .pather(&p)
            .build()
            .unwrap();
        let r = config.astar_path().unwrap().unwrap();
        assert_eq!(r.steps(), 5);
        assert_eq!(r.cost, 5.0);
    }

    #[test]
    fn connectivity_from_a_grid() {
        let g = TerrainGrid::parse("..#..\n..#..").unwrap();
        let p = pather(&g);
        let config = SearchConfig::builder(Point::ZERO).pather(&p).build().unwrap();
        let left = config.reachable();
        assert_eq!(left.len(), 4);
        assert!(!config.is_connected(&Point::flat(3, 0)));
        assert!(config.is_connected(&Point::flat(1, 1)));
    }

    #[test]
    fn one_grid_many_searchers() {
        let g = TerrainGrid::parse(MAZE).unwrap();
        let p = pather(&g);
        let config = SearchConfig::builder(Point::flat(0, 4))
            .range(6.0)
            .pather(&p)
            .build()
            .unwrap();
        let expected = config.range_search().unwrap().costs_by_element();
        std::thread::scope(|s| {
            let workers: Vec<_> = (0..3)
                .map(|_| s.spawn(|| config.range_search().unwrap().costs_by_element()))
                .collect();
            for w in workers {
                assert_eq!(w.join().unwrap(), expected);
            }
        });
    }
}
