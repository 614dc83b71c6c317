//! PyO3 bindings for the `planar_dual` pipeline.
//!
//! Notes
//! - Keep bindings thin and predictable: inputs and outputs are tuples, lists and
//!   dicts; higher-level wrappers on the Python side build arrays from them.
//! - The matching solver and sampler stay in Python; only the preprocessing runs here.

mod common;
mod pipeline;
mod rand;

use pyo3::prelude::*;

#[pymodule]
fn planar_dual_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", planar_dual::VERSION)?;
    pipeline::register(m)?;
    rand::register(m)?;
    Ok(())
}
