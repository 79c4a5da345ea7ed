//! PyO3 bindings for the `clockring` sorter.
//!
//! Notes
//! - Keep bindings thin and predictable; points cross the boundary as plain
//!   `(x, y)` tuples and parallel float lists.
//! - All ordering logic stays in the `clockring` crate.

use pyo3::prelude::*;

mod common;
mod ring;

#[pymodule]
fn clockring_native(_py: Python, m: &PyModule) -> PyResult<()> {
    ring::register(m)?;
    m.add("__version__", clockring::VERSION)?;
    Ok(())
}
