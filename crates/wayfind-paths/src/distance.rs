use wayfind_core::Point;

use crate::Cost;

/// Per-axis absolute differences, computed in `Cost` so that points at the
/// opposite ends of the `i32` range do not overflow.
#[inline]
fn deltas(a: Point, b: Point) -> (Cost, Cost, Cost) {
    (
        (a.x as Cost - b.x as Cost).abs(),
        (a.y as Cost - b.y as Cost).abs(),
        (a.z as Cost - b.z as Cost).abs(),
    )
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> Cost {
    let (x, y, z) = deltas(a, b);
    x + y + z
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> Cost {
    let (x, y, z) = deltas(a, b);
    x.max(y).max(z)
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> Cost {
    let (x, y, z) = deltas(a, b);
    (x * x + y * y + z * z).sqrt()
}
