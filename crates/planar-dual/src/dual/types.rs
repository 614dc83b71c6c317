//! Expanded dual graph: nodes are half-edges, edges are crossings and wedges.

use std::collections::HashMap;

use crate::error::{PlanarError, Result};
use crate::graph::{Edge, EdgeId, HalfEdgeId, NodeId};

/// Where a dual edge comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DualEdgeKind {
    /// Joins the two directions of one original edge; carries its weight.
    Crossing(EdgeId),
    /// Joins consecutive boundary half-edges of a face at the corner `around`.
    Wedge { around: NodeId },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DualEdge {
    pub a: HalfEdgeId,
    pub b: HalfEdgeId,
    pub weight: f64,
    pub kind: DualEdgeKind,
}

impl DualEdge {
    /// Endpoints with the smaller half-edge first.
    #[inline]
    pub fn ends(&self) -> (HalfEdgeId, HalfEdgeId) {
        pair(self.a, self.b)
    }
}

/// Simple graph on `2m` nodes, one per half-edge of the triangulated embedding.
///
/// Dual node `i` is `HalfEdgeId(i)`; `token(h)` gives the `(u, v, key)` form.
#[derive(Clone, Debug, Default)]
pub struct ExpandedDual {
    tokens: Vec<Edge>,
    lookup: HashMap<Edge, HalfEdgeId>,
    edges: Vec<DualEdge>,
    index: HashMap<(HalfEdgeId, HalfEdgeId), usize>,
}

impl ExpandedDual {
    pub(crate) fn with_tokens(tokens: Vec<Edge>) -> Self {
        let lookup = tokens
            .iter()
            .enumerate()
            .map(|(i, &t)| (t, HalfEdgeId(i)))
            .collect();
        Self {
            tokens,
            lookup,
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add an edge; a second edge between the same pair is an invariant violation.
    pub(crate) fn insert(&mut self, edge: DualEdge) -> Result<()> {
        let key = edge.ends();
        if self.index.contains_key(&key) {
            return Err(PlanarError::Invariant(format!(
                "dual edge {} -- {} appears twice (is every face a triangle?)",
                self.tokens[key.0 .0], self.tokens[key.1 .0]
            )));
        }
        self.index.insert(key, self.edges.len());
        self.edges.push(edge);
        Ok(())
    }

    pub fn num_nodes(&self) -> usize {
        self.tokens.len()
    }
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
    pub fn nodes(&self) -> impl Iterator<Item = HalfEdgeId> {
        (0..self.tokens.len()).map(HalfEdgeId)
    }
    pub fn edges(&self) -> &[DualEdge] {
        &self.edges
    }

    #[inline]
    pub fn token(&self, h: HalfEdgeId) -> Edge {
        self.tokens[h.0]
    }
    pub fn node_of(&self, token: Edge) -> Option<HalfEdgeId> {
        self.lookup.get(&token).copied()
    }

    pub fn find(&self, a: HalfEdgeId, b: HalfEdgeId) -> Option<&DualEdge> {
        self.index.get(&pair(a, b)).map(|&i| &self.edges[i])
    }

    /// The crossing edge of original edge `e`.
    pub fn crossing(&self, e: EdgeId) -> Option<&DualEdge> {
        self.find(e.forward(), e.backward())
    }

    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|d| d.weight).sum()
    }
}

#[inline]
fn pair(a: HalfEdgeId, b: HalfEdgeId) -> (HalfEdgeId, HalfEdgeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
