use nalgebra::Vector2;
use planar_dual::graph::{MultiGraph, NodeId};
use planar_dual::prelude::FaceScope;
use planar_dual::PlanarError;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

/// Edges arrive as `(u, v, weight)` with `weight = None` for unweighted edges.
pub type PyEdge = (usize, usize, Option<f64>);

pub fn graph_from_py(
    positions: &[(f64, f64)],
    edges: Vec<PyEdge>,
) -> PyResult<(MultiGraph, Vec<Vector2<f64>>)> {
    let mut g = MultiGraph::with_nodes(positions.len());
    for (u, v, w) in edges {
        let e = g.add_edge(NodeId(u), NodeId(v)).map_err(map_planar_err)?;
        if let Some(w) = w {
            g.set_weight(e, w).map_err(map_planar_err)?;
        }
    }
    let pts = positions.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
    Ok((g, pts))
}

pub fn scope_from_str(scope: &str) -> PyResult<FaceScope> {
    match scope {
        "all" => Ok(FaceScope::All),
        "bounded" => Ok(FaceScope::Bounded),
        other => Err(PyValueError::new_err(format!(
            "scope must be 'all' or 'bounded', got {other:?}"
        ))),
    }
}

/// Bad input maps to `ValueError`, broken internal state to `RuntimeError`.
pub fn map_planar_err(err: PlanarError) -> PyErr {
    match err {
        PlanarError::Invariant(_) => PyRuntimeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}
