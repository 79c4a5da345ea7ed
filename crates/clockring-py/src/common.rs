use clockring::{Point2, RingError, UtmError};
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

pub fn points_from_py(points: &[(f64, f64)]) -> Vec<Point2> {
    points.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

pub fn map_ring_err(err: RingError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_utm_err(err: UtmError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
