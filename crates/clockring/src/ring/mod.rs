//! Clockwise ordering of planar point sets (polygon rings).
//!
//! Purpose
//! - Turn an unordered set of 2D points (typically UTM eastings/northings) into
//!   a clockwise ring around its centroid, ready to hand to a geometry builder.
//! - One algorithm, two call shapes: a slice of pairs or two parallel slices.
//!
//! Algorithm
//! - Angle of every point about the centroid, normalized to `[0, 2π)`.
//! - Stable ascending sort, rotate the minimum-angle point to the front.
//! - Orientation check on the first three points; reverse if counter-clockwise.
//!
//! Code cross-refs: `sort_clockwise`, `sort_clockwise_xy`, `util::cross`

mod sort;
mod types;
mod util;

pub use sort::{sort_clockwise, sort_clockwise_pairs, sort_clockwise_xy};
pub use types::{Point2, RingError};
pub use util::{centroid, close_ring, cross, is_clockwise, normalized_angle, signed_area};
