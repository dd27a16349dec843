//! Python bindings for the pip package.
//!
//! Build with `--features python` using maturin; the default build carries
//! no Python toolchain requirement.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Calculate derived golf shot values from a JSON payload.
#[pyfunction]
fn calculate_derived_values(json_input: &str) -> PyResult<String> {
    crate::bindings::calculate_derived_values(json_input)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn opengolfcoach(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(calculate_derived_values, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
