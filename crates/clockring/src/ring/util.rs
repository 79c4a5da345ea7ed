use std::f64::consts::TAU;

use super::types::Point2;

/// Arithmetic mean of `points`; `None` for an empty slice.
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    (!points.is_empty()).then(|| mean(points))
}

/// Mean of a non-empty slice.
#[inline]
pub(super) fn mean(points: &[Point2]) -> Point2 {
    debug_assert!(!points.is_empty());
    points.iter().fold(Point2::zeros(), |acc, p| acc + p) / points.len() as f64
}

/// Angle of `p` seen from `center`, in `[0, 2π)`.
///
/// A point on the center maps to `0` (`atan2(0, 0) = 0`).
#[inline]
pub fn normalized_angle(center: Point2, p: Point2) -> f64 {
    let d = p - center;
    (d.y.atan2(d.x) + TAU) % TAU
}

/// `(b − a) × (c − a)`: positive when `a → b → c` turns counter-clockwise.
#[inline]
pub fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Shoelace area of the (implicitly closed) ring.
///
/// Positive for counter-clockwise, negative for clockwise, `0.0` below three points.
/// A repeated closing point contributes nothing, so open and closed rings agree.
/// Terms are taken relative to the first vertex to keep UTM-sized coordinates exact.
pub fn signed_area(ring: &[Point2]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let origin = ring[0];
    let mut twice = 0.0;
    for k in 1..ring.len() - 1 {
        twice += cross(origin, ring[k], ring[k + 1]);
    }
    0.5 * twice
}

/// True when the ring encloses a negative signed area.
#[inline]
pub fn is_clockwise(ring: &[Point2]) -> bool {
    signed_area(ring) < 0.0
}

/// Repeat the first vertex at the end unless the ring is already closed.
///
/// Exact comparison: a last vertex that differs by rounding still gets closed.
pub fn close_ring(ring: &mut Vec<Point2>) {
    let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) else {
        return;
    };
    if first != last {
        ring.push(first);
    }
}
