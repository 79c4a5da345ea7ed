//! Clockwise ordering of planar point sets and small ring utilities.
//!
//! The sorter takes loose survey points (UTM eastings/northings, or any planar
//! coordinates) and returns them as a clockwise polygon ring. Everything else
//! in the crate supports that: ring predicates, UTM zone labels for output
//! metadata, and reproducible random point sets for tests and benches.
//!
//! API Policy
//! - The library is pure: no I/O, no logging, no global state.
//! - Breaking changes are fine while the crate is unpublished.

pub mod rand;
pub mod ring;
pub mod utm;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use ring::{
    sort_clockwise, sort_clockwise_pairs, sort_clockwise_xy, Point2, RingError,
};
pub use utm::{Hemisphere, UtmError, UtmZone};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{
        draw_points_convex, draw_points_radial, translate, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::ring::{
        centroid, close_ring, cross, is_clockwise, normalized_angle, signed_area, sort_clockwise,
        sort_clockwise_pairs, sort_clockwise_xy, Point2, RingError,
    };
    pub use crate::utm::{Hemisphere, UtmError, UtmZone};
}
