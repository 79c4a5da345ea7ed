//! Ring sorting and helper bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_ring_err, map_utm_err, points_from_py};
use clockring::ring::signed_area as ring_signed_area;
use clockring::{Hemisphere, UtmZone};
use pyo3::prelude::*;

/// Order `(x, y)` tuples clockwise around their centroid.
#[pyfunction]
pub fn sort_clockwise(points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    clockring::sort_clockwise_pairs(&points)
}

/// Order parallel coordinate lists clockwise; raises `ValueError` on a length mismatch.
#[pyfunction]
pub fn sort_clockwise_xy(xs: Vec<f64>, ys: Vec<f64>) -> PyResult<Vec<(f64, f64)>> {
    clockring::sort_clockwise_xy(&xs, &ys).map_err(map_ring_err)
}

/// Shoelace area; negative for clockwise rings.
#[pyfunction]
pub fn signed_area(points: Vec<(f64, f64)>) -> f64 {
    ring_signed_area(&points_from_py(&points))
}

/// EPSG code of WGS 84 / UTM `zone` in `hemisphere` ("N" or "S").
#[pyfunction]
pub fn utm_epsg(zone: u8, hemisphere: &str) -> PyResult<u32> {
    let hemisphere: Hemisphere = hemisphere.parse().map_err(map_utm_err)?;
    let zone = UtmZone::new(zone, hemisphere).map_err(map_utm_err)?;
    Ok(zone.epsg())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sort_clockwise, m)?)?;
    m.add_function(wrap_pyfunction!(sort_clockwise_xy, m)?)?;
    m.add_function(wrap_pyfunction!(signed_area, m)?)?;
    m.add_function(wrap_pyfunction!(utm_epsg, m)?)?;
    Ok(())
}
