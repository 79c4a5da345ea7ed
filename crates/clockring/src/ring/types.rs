//! Point type and the error raised by the parallel-slice entry point.

use nalgebra::Vector2;
use thiserror::Error;

/// A planar point `(x, y)`; for UTM input `x` is easting and `y` northing.
pub type Point2 = Vector2<f64>;

/// Errors from the ring sorter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RingError {
    /// Parallel coordinate slices disagree in length.
    #[error("invalid input: x has {xs} coordinates but y has {ys}")]
    InvalidInput { xs: usize, ys: usize },
}
