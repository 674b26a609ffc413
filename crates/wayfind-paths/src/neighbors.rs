use wayfind_core::Point;

use crate::Cost;
use crate::distance::{chebyshev, manhattan};

/// The four in-plane cardinal neighbors of `p` (up, right, down, left).
pub fn cardinal(p: Point) -> Vec<Point> {
    p.neighbors_4().to_vec()
}

/// All eight in-plane neighbors of `p`, clockwise from up.
pub fn all(p: Point) -> Vec<Point> {
    p.neighbors_8().to_vec()
}

/// The six axis-orthogonal neighbors of `p`: the four cardinals, then the
/// layer above and the layer below.
pub fn orthogonal(p: Point) -> Vec<Point> {
    p.neighbors_6().to_vec()
}

/// How grid cells connect to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way, within a layer.
    #[default]
    Cardinal,
    /// 8-way, within a layer.
    Diagonal,
    /// 6-way, including the layers above and below.
    Orthogonal,
}

impl Connectivity {
    /// Neighbors of `p` under this connectivity.
    pub fn neighbors(self, p: Point) -> Vec<Point> {
        match self {
            Self::Cardinal => cardinal(p),
            Self::Diagonal => all(p),
            Self::Orthogonal => orthogonal(p),
        }
    }

    /// A step length that never overestimates under this connectivity.
    pub fn distance(self, a: Point, b: Point) -> Cost {
        match self {
            Self::Cardinal | Self::Orthogonal => manhattan(a, b),
            Self::Diagonal => chebyshev(a, b),
        }
    }
}
