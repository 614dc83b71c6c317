//! Pipeline bindings.
//!
//! Outputs are plain dicts of lists so they convert to NumPy arrays without help:
//! - `edges`: `(from, to, key)` per edge of the triangulated graph, chords last;
//! - `heads`: orientation head per edge;
//! - `tokens`: `(from, to, key)` per dual node (half-edge);
//! - `dual`: `(a, b, weight, is_crossing)` per dual edge, `a`/`b` index `tokens`.

use crate::common::{graph_from_py, map_planar_err, scope_from_str, PyEdge};
use planar_dual::graph::{EdgeId, HalfEdgeId};
use planar_dual::prelude::*;
use pyo3::prelude::*;
use pyo3::types::PyDict;

type Token = (usize, usize, u32);

fn run(
    positions: Vec<(f64, f64)>,
    edges: Vec<PyEdge>,
    scope: &str,
    default_weight: f64,
) -> PyResult<PipelineOutput> {
    let (g, pts) = graph_from_py(&positions, edges)?;
    let cfg = PipelineCfg {
        triangulate: TriangulateCfg {
            scope: scope_from_str(scope)?,
        },
        dual: DualCfg { default_weight },
        validate: false,
    };
    run_pipeline_with_positions(g, &pts, cfg).map_err(map_planar_err)
}

/// Triangulate, orient and dualize a straight-line planar drawing.
#[pyfunction]
#[pyo3(signature = (positions, edges, scope = "all", default_weight = 0.0))]
pub fn planar_pipeline(
    py: Python<'_>,
    positions: Vec<(f64, f64)>,
    edges: Vec<PyEdge>,
    scope: &str,
    default_weight: f64,
) -> PyResult<PyObject> {
    let out = run(positions, edges, scope, default_weight)?;
    let g = out.embedding.graph();
    let token = |e: Edge| -> Token { (e.from.0, e.to.0, e.key) };

    let d = PyDict::new(py);
    let edges: Vec<Token> = g.edges().map(token).collect();
    let heads: Vec<usize> = out.orientation.heads().iter().map(|v| v.0).collect();
    let tokens: Vec<Token> = out.dual.nodes().map(|h| token(out.dual.token(h))).collect();
    let dual: Vec<(usize, usize, f64, bool)> = out
        .dual
        .edges()
        .iter()
        .map(|e| {
            let crossing = matches!(e.kind, DualEdgeKind::Crossing(_));
            (e.a.0, e.b.0, e.weight, crossing)
        })
        .collect();
    d.set_item("edges", edges)?;
    d.set_item("num_chords", out.triangulation.chords.len())?;
    d.set_item("heads", heads)?;
    d.set_item("tokens", tokens)?;
    d.set_item("dual", dual)?;
    Ok(d.into())
}

/// Edge ids cut by a perfect matching of the expanded dual.
///
/// `matching` pairs index the `tokens` list returned by `planar_pipeline` for the same
/// input.
#[pyfunction]
#[pyo3(signature = (positions, edges, matching, scope = "all"))]
pub fn cut_from_matching(
    positions: Vec<(f64, f64)>,
    edges: Vec<PyEdge>,
    matching: Vec<(usize, usize)>,
    scope: &str,
) -> PyResult<Vec<usize>> {
    let out = run(positions, edges, scope, 0.0)?;
    let pairs: Vec<(HalfEdgeId, HalfEdgeId)> = matching
        .into_iter()
        .map(|(a, b)| (HalfEdgeId(a), HalfEdgeId(b)))
        .collect();
    let cut = out.dual.cut_from_matching(&pairs).map_err(map_planar_err)?;
    Ok(cut.into_iter().map(|EdgeId(e)| e).collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(planar_pipeline, m)?)?;
    m.add_function(wrap_pyfunction!(cut_from_matching, m)?)?;
    Ok(())
}
