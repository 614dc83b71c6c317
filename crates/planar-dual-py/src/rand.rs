//! Random grid instances for Python-side tests and sweeps.

use crate::common::map_planar_err;
use planar_dual::prelude::{draw_grid_instance, GridCfg, ReplayToken};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Jittered grid graph as `{"positions": [(x, y)], "edges": [(u, v, weight)]}`.
#[pyfunction]
#[pyo3(signature = (width, height, seed, index = 0, diagonal_prob = 0.5, jitter = 0.2))]
pub fn grid_instance(
    py: Python<'_>,
    width: usize,
    height: usize,
    seed: u64,
    index: u64,
    diagonal_prob: f64,
    jitter: f64,
) -> PyResult<PyObject> {
    let cfg = GridCfg {
        width,
        height,
        diagonal_prob,
        jitter,
        ..GridCfg::default()
    };
    let inst = draw_grid_instance(cfg, ReplayToken { seed, index }).map_err(map_planar_err)?;
    let positions: Vec<(f64, f64)> = inst.positions.iter().map(|p| (p.x, p.y)).collect();
    let edges: Vec<(usize, usize, Option<f64>)> = inst
        .graph
        .edge_ids()
        .map(|e| {
            let rec = inst.graph.record(e);
            (rec.ends[0].0, rec.ends[1].0, rec.weight)
        })
        .collect();
    let d = PyDict::new(py);
    d.set_item("positions", positions)?;
    d.set_item("edges", edges)?;
    Ok(d.into())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(grid_instance, m)?)?;
    Ok(())
}
