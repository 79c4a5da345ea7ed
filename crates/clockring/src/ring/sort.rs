use std::cmp::Ordering;

use super::types::{Point2, RingError};
use super::util::{cross, mean, normalized_angle};

/// Order `points` clockwise around their centroid.
///
/// Pre: none; duplicates and points on the centroid are accepted.
/// Post: a permutation of `points`. Fewer than three points come back unchanged.
///
/// Steps
/// - Stable ascending sort by angle in `[0, 2π)` (counter-clockwise sweep).
/// - Rotate the first minimum-angle point to the front.
/// - If the first three points turn counter-clockwise, reverse the sequence.
pub fn sort_clockwise(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let center = mean(points);
    let mut keyed: Vec<(f64, Point2)> = points
        .iter()
        .map(|&p| (normalized_angle(center, p), p))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    // NaN keys leave the sort order partial, so the minimum is searched explicitly.
    let mut start = 0;
    for (k, (angle, _)) in keyed.iter().enumerate().skip(1) {
        if *angle < keyed[start].0 {
            start = k;
        }
    }
    keyed.rotate_left(start);

    let mut ring: Vec<Point2> = keyed.into_iter().map(|(_, p)| p).collect();
    if cross(ring[0], ring[1], ring[2]) > 0.0 {
        ring.reverse();
    }
    ring
}

/// `sort_clockwise` for `(x, y)` tuples.
pub fn sort_clockwise_pairs(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let pts: Vec<Point2> = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
    to_pairs(sort_clockwise(&pts))
}

/// `sort_clockwise` for parallel coordinate slices (`xs[i]`, `ys[i]`).
///
/// Errors with `RingError::InvalidInput` when the slices differ in length.
pub fn sort_clockwise_xy(xs: &[f64], ys: &[f64]) -> Result<Vec<(f64, f64)>, RingError> {
    if xs.len() != ys.len() {
        return Err(RingError::InvalidInput {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    let pts: Vec<Point2> = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| Point2::new(x, y))
        .collect();
    Ok(to_pairs(sort_clockwise(&pts)))
}

#[inline]
fn to_pairs(ring: Vec<Point2>) -> Vec<(f64, f64)> {
    ring.into_iter().map(|p| (p.x, p.y)).collect()
}
