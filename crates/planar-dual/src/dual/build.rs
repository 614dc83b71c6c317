//! Dual construction from a triangulated embedding.

use crate::error::{PlanarError, Result};
use crate::graph::{Embedding, HalfEdgeId};

use super::types::{DualEdge, DualEdgeKind, ExpandedDual};

#[derive(Clone, Copy, Debug)]
pub struct DualCfg {
    /// Crossing weight for edges without a weight (chords, unweighted input).
    pub default_weight: f64,
}

impl Default for DualCfg {
    fn default() -> Self {
        Self {
            default_weight: 0.0,
        }
    }
}

/// Build the expanded dual of a triangulated embedding.
///
/// For an edge `(u, v, key)` pointing toward `v`, the dual node `(u, v, key)` sits on
/// its right-hand side and `(v, u, key)` on its left. Every original edge yields one
/// crossing edge between the two; every corner `left → succ(left)` at a node yields
/// one zero-weight wedge edge between `left` and the reverse of its successor.
///
/// A node of degree one would repeat its crossing edge as a wedge, so it is rejected
/// up front. Only `FaceScope::Bounded` can leave one, on the untouched outer face.
pub fn expanded_dual(emb: &Embedding, cfg: DualCfg) -> Result<ExpandedDual> {
    let g = emb.graph();
    if let Some(v) = g.nodes().find(|&v| g.degree(v) == 1) {
        return Err(PlanarError::PendantNode(v));
    }
    let tokens = (0..g.num_half_edges())
        .map(|h| g.token(HalfEdgeId(h)))
        .collect();
    let mut dual = ExpandedDual::with_tokens(tokens);
    for e in g.edge_ids() {
        dual.insert(DualEdge {
            a: e.forward(),
            b: e.backward(),
            weight: g.record(e).weight.unwrap_or(cfg.default_weight),
            kind: DualEdgeKind::Crossing(e),
        })?;
    }
    for n in g.nodes() {
        for &left in g.incident(n) {
            let right = emb.succ(left);
            dual.insert(DualEdge {
                a: left,
                b: right.twin(),
                weight: 0.0,
                kind: DualEdgeKind::Wedge { around: n },
            })?;
        }
    }
    tracing::debug!(
        nodes = dual.num_nodes(),
        edges = dual.num_edges(),
        "built expanded dual"
    );
    Ok(dual)
}
