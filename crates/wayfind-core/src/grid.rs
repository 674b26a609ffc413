//! A layered terrain grid for map representation.
//!
//! [`TerrainGrid`] stores one [`Terrain`] per cell of its [`Bounds`] and can
//! be parsed from ASCII layers:
//!
//! | Rune | Terrain |
//! |---|---|
//! | `.` | [`Terrain::Floor`] |
//! | `~` | [`Terrain::Rough`] |
//! | `#` | [`Terrain::Wall`] |
//! | `@` | [`Terrain::Occupied`] |
//! | `x` | [`Terrain::Void`] |

use std::fmt;

use crate::geom::{Bounds, Point};

/// Default traversal multiplier for [`Terrain::Rough`] cells.
pub const DEFAULT_ROUGH_COST: f64 = 2.0;

/// Kind of terrain in a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Plain walkable ground.
    #[default]
    Floor,
    /// Walkable ground that costs more to cross.
    Rough,
    /// Solid obstacle.
    Wall,
    /// Walkable ground currently taken by something else.
    Occupied,
    /// Not part of the map at all.
    Void,
}

impl Terrain {
    /// Parse a single map rune.
    pub fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Floor),
            '~' => Some(Self::Rough),
            '#' => Some(Self::Wall),
            '@' => Some(Self::Occupied),
            'x' => Some(Self::Void),
            _ => None,
        }
    }

    /// The rune used for this terrain in ASCII maps.
    pub fn rune(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Rough => '~',
            Self::Wall => '#',
            Self::Occupied => '@',
            Self::Void => 'x',
        }
    }
}

/// A 3D grid of [`Terrain`] cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainGrid {
    cells: Vec<Terrain>,
    bounds: Bounds,
    rough_cost: f64,
}

impl TerrainGrid {
    /// Create a single-layer grid filled with [`Terrain::Floor`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_bounds(Bounds::sized(width, height, 1))
    }

    /// Create a grid covering `bounds`, filled with [`Terrain::Floor`].
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            cells: vec![Terrain::Floor; bounds.len()],
            bounds,
            rough_cost: DEFAULT_ROUGH_COST,
        }
    }

    /// Parse a single-layer grid (`z = 0`) from ASCII rows.
    pub fn parse(layer: &str) -> Result<Self, GridError> {
        Self::parse_layers(&[layer])
    }

    /// Parse a stacked grid; `layers[i]` becomes `z = i`.
    ///
    /// Every layer must have the same width and height. Leading and trailing
    /// blank lines are ignored.
    pub fn parse_layers(layers: &[&str]) -> Result<Self, GridError> {
        let mut size: Option<(usize, usize)> = None;
        let mut cells = Vec::new();

        for (z, layer) in layers.iter().enumerate() {
            let rows: Vec<&str> = layer.trim_matches('\n').lines().collect();
            let width = rows.first().map_or(0, |r| r.chars().count());
            if rows.iter().any(|r| r.chars().count() != width) {
                return Err(GridError::InconsistentSize(layer.to_string()));
            }
            match size {
                None => size = Some((width, rows.len())),
                Some(s) if s != (width, rows.len()) => {
                    return Err(GridError::LayerMismatch { layer: z });
                }
                Some(_) => {}
            }
            for (y, row) in rows.iter().enumerate() {
                for (x, ch) in row.chars().enumerate() {
                    let t = Terrain::from_rune(ch).ok_or(GridError::InvalidRune {
                        ch,
                        pos: Point::new(x as i32, y as i32, z as i32),
                    })?;
                    cells.push(t);
                }
            }
        }

        let (w, h) = size.unwrap_or((0, 0));
        let bounds = Bounds::sized(w as i32, h as i32, layers.len() as i32);
        if bounds.is_empty() {
            cells.clear();
        }
        Ok(Self {
            cells,
            bounds,
            rough_cost: DEFAULT_ROUGH_COST,
        })
    }

    /// Set the traversal multiplier used for [`Terrain::Rough`] cells.
    pub fn with_rough_cost(mut self, cost: f64) -> Self {
        self.rough_cost = cost;
        self
    }

    /// The box covered by this grid.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Terrain at `p`, or `None` if out of bounds.
    pub fn terrain(&self, p: Point) -> Option<Terrain> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Set the terrain at `p`. Returns `false` (and does nothing) if out of
    /// bounds.
    pub fn set(&mut self, p: Point, t: Terrain) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.cells[i] = t;
                true
            }
            None => false,
        }
    }

    /// Traversal multiplier for entering `p`: 1 for floor and occupied cells,
    /// the rough cost for rough cells. Walls, void and out-of-bounds cells
    /// have infinite cost.
    pub fn cost(&self, p: Point) -> f64 {
        match self.terrain(p) {
            Some(Terrain::Floor) | Some(Terrain::Occupied) => 1.0,
            Some(Terrain::Rough) => self.rough_cost,
            _ => f64::INFINITY,
        }
    }

    /// Iterate over every `(point, terrain)` pair, layer by layer.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for TerrainGrid {
    /// Renders layers separated by a blank line, mirroring the parse format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bounds;
        for z in b.min.z..b.max.z {
            if z > b.min.z {
                writeln!(f)?;
            }
            for y in b.min.y..b.max.y {
                for x in b.min.x..b.max.x {
                    let t = self.terrain(Point::new(x, y, z)).unwrap_or(Terrain::Void);
                    write!(f, "{}", t.rune())?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a terrain grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Rows of a layer have inconsistent widths.
    InconsistentSize(String),
    /// A character that is not a terrain rune was found.
    InvalidRune { ch: char, pos: Point },
    /// A layer's size differs from the first layer.
    LayerMismatch { layer: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "grid: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::LayerMismatch { layer } => {
                write!(f, "grid: layer {layer} differs in size from layer 0")
            }
        }
    }
}

impl std::error::Error for GridError {}
