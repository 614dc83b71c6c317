//! Orientation data type and its face-parity checks.

use crate::error::{PlanarError, Result};
use crate::graph::{Edge, EdgeId, Embedding, FaceId, Faces, HalfEdgeId, MultiGraph, NodeId};

/// Head (the endpoint an edge points toward) of every undirected edge, indexed by `EdgeId`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orientation {
    heads: Vec<NodeId>,
}

impl Orientation {
    pub(crate) fn from_heads(heads: Vec<NodeId>) -> Self {
        Self { heads }
    }

    pub fn len(&self) -> usize {
        self.heads.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    #[inline]
    pub fn head(&self, e: EdgeId) -> NodeId {
        self.heads[e.0]
    }

    pub fn heads(&self) -> &[NodeId] {
        &self.heads
    }

    /// True when the edge under `h` points from `origin(h)` to `dest(h)`.
    #[inline]
    pub fn points_along(&self, graph: &MultiGraph, h: HalfEdgeId) -> bool {
        self.heads[h.edge().0] == graph.dest(h)
    }

    /// Head of the undirected edge behind `edge`, in either direction.
    pub fn toward(&self, graph: &MultiGraph, edge: Edge) -> Option<NodeId> {
        graph.half_edge(edge).map(|h| self.head(h.edge()))
    }

    /// Lookup by canonical `(min, max, key)` form.
    pub fn toward_canonical(
        &self,
        graph: &MultiGraph,
        (lo, hi, key): (NodeId, NodeId, u32),
    ) -> Option<NodeId> {
        self.toward(graph, Edge::new(lo, hi, key))
    }

    /// `(canonical edge, head)` pairs in edge-id order.
    pub fn canonical_pairs<'a>(
        &'a self,
        graph: &'a MultiGraph,
    ) -> impl Iterator<Item = ((NodeId, NodeId, u32), NodeId)> + 'a {
        graph
            .edge_ids()
            .map(move |e| (graph.token(e.forward()).canonical(), self.head(e)))
    }

    /// Boundary edges of `f` pointing along the face walk.
    ///
    /// Bounded faces are walked clockwise, so for them this is the number of edges
    /// oriented clockwise.
    pub fn clockwise_count(&self, emb: &Embedding, faces: &Faces, f: FaceId) -> usize {
        faces
            .boundary(emb, f)
            .filter(|&h| self.points_along(emb.graph(), h))
            .count()
    }

    /// Check that every bounded face has an odd clockwise count.
    pub fn check_clockwise_odd(&self, emb: &Embedding) -> Result<()> {
        if self.heads.len() != emb.graph().num_edges() {
            return Err(PlanarError::Invariant(format!(
                "orientation covers {} edges, embedding has {}",
                self.heads.len(),
                emb.graph().num_edges()
            )));
        }
        let faces = emb.faces();
        let outer = super::parity::unbounded_face(emb, &faces);
        for f in faces.ids().filter(|&f| Some(f) != outer) {
            let cw = self.clockwise_count(emb, &faces, f);
            if cw % 2 == 0 {
                return Err(PlanarError::Invariant(format!(
                    "face {f} (from {}) has {cw} clockwise edges",
                    emb.graph().token(faces.start(f))
                )));
            }
        }
        Ok(())
    }
}
