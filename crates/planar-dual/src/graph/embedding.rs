//! Rotation system and the embedded multigraph it decorates.
//!
//! The rotation stores, for every half-edge `h` leaving `v`, the next half-edge
//! leaving `v` (`succ`) and the previous one (`pred`). Keeping `pred` alongside
//! `succ` makes the inverse lookup O(1) during chord insertion.
//!
//! Face convention: the successor of `(i, j)` along its face is `succ[(j, i)]`. With
//! rotations sorted by increasing polar angle (counterclockwise in y-up coordinates)
//! every face lies on the right of its walk: bounded faces are traced clockwise and
//! the unbounded face counterclockwise.

use super::faces::{FaceWalk, Faces};
use super::multigraph::MultiGraph;
use super::types::{EdgeId, HalfEdgeId, NodeId};
use crate::error::{PlanarError, Result};

/// Per-vertex cyclic order of outgoing half-edges, as successor/predecessor arrays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    succ: Vec<HalfEdgeId>,
    pred: Vec<HalfEdgeId>,
}

impl Rotation {
    /// Build from explicit cyclic orders: `orders[v]` lists every half-edge leaving `v`
    /// exactly once, in rotation order.
    pub fn from_cyclic_orders(graph: &MultiGraph, orders: &[Vec<HalfEdgeId>]) -> Result<Self> {
        if orders.len() != graph.num_nodes() {
            return Err(PlanarError::InvalidRotation {
                node: NodeId(orders.len().min(graph.num_nodes())),
                reason: format!(
                    "{} cyclic orders given for {} nodes",
                    orders.len(),
                    graph.num_nodes()
                ),
            });
        }
        let m2 = graph.num_half_edges();
        let mut succ: Vec<HalfEdgeId> = (0..m2).map(HalfEdgeId).collect();
        let mut seen = vec![false; m2];
        for (v, order) in graph.nodes().zip(orders) {
            if order.len() != graph.degree(v) {
                return Err(PlanarError::InvalidRotation {
                    node: v,
                    reason: format!("order has {} entries, degree is {}", order.len(), graph.degree(v)),
                });
            }
            for &h in order {
                if h.0 >= m2 || graph.origin(h) != v || seen[h.0] {
                    return Err(PlanarError::InvalidRotation {
                        node: v,
                        reason: format!("half-edge {} is foreign or repeated", h),
                    });
                }
                seen[h.0] = true;
            }
            for (i, &h) in order.iter().enumerate() {
                let prev = order[(i + order.len() - 1) % order.len()];
                succ[prev.0] = h;
            }
        }
        let mut pred = succ.clone();
        for (h, &s) in succ.iter().enumerate() {
            pred[s.0] = HalfEdgeId(h);
        }
        Ok(Self { succ, pred })
    }

    #[inline]
    pub fn succ(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.succ[h.0]
    }
    #[inline]
    pub fn pred(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.pred[h.0]
    }

    fn len(&self) -> usize {
        self.succ.len()
    }

    #[inline]
    fn link(&mut self, a: HalfEdgeId, b: HalfEdgeId) {
        self.succ[a.0] = b;
        self.pred[b.0] = a;
    }

    /// Insert `new` right after `at` in `at`'s vertex cycle.
    fn splice_after(&mut self, at: HalfEdgeId, new: HalfEdgeId) {
        let next = self.succ[at.0];
        self.link(at, new);
        self.link(new, next);
    }

    /// Reserve self-linked slots for a freshly appended edge.
    fn push_edge(&mut self, e: EdgeId) {
        for h in [e.forward(), e.backward()] {
            self.succ.push(h);
            self.pred.push(h);
        }
    }
}

/// Multigraph plus rotation system plus an optional marker on the unbounded face.
#[derive(Clone, Debug)]
pub struct Embedding {
    graph: MultiGraph,
    rotation: Rotation,
    outer: Option<HalfEdgeId>,
}

impl Embedding {
    /// Pair a graph with a rotation; the rotation is validated first.
    pub fn new(graph: MultiGraph, rotation: Rotation) -> Result<Self> {
        let emb = Self {
            graph,
            rotation,
            outer: None,
        };
        emb.validate()?;
        Ok(emb)
    }

    pub fn from_cyclic_orders(graph: MultiGraph, orders: &[Vec<HalfEdgeId>]) -> Result<Self> {
        let rotation = Rotation::from_cyclic_orders(&graph, orders)?;
        Self::new(graph, rotation)
    }

    #[inline]
    pub fn graph(&self) -> &MultiGraph {
        &self.graph
    }
    #[inline]
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }
    pub fn into_parts(self) -> (MultiGraph, Rotation) {
        (self.graph, self.rotation)
    }

    /// Weights do not touch the embedding, so they may change after construction.
    pub fn set_weight(&mut self, e: EdgeId, weight: f64) -> Result<()> {
        self.graph.set_weight(e, weight)
    }

    #[inline]
    pub fn succ(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.rotation.succ(h)
    }
    #[inline]
    pub fn pred(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.rotation.pred(h)
    }

    /// Next half-edge on the face of `h`: for `h = (i, j)` this is `succ[(j, i)]`.
    #[inline]
    pub fn face_next(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.rotation.succ(h.twin())
    }

    /// Inverse of `face_next`.
    #[inline]
    pub fn face_prev(&self, h: HalfEdgeId) -> HalfEdgeId {
        self.rotation.pred(h).twin()
    }

    pub fn face_walk(&self, start: HalfEdgeId) -> FaceWalk<'_> {
        FaceWalk::new(self, start)
    }

    pub fn faces(&self) -> Faces {
        Faces::new(self)
    }

    /// Half-edges leaving `v` in rotation order, starting at its first incident half-edge.
    pub fn rotation_at(&self, v: NodeId) -> Vec<HalfEdgeId> {
        let Some(&start) = self.graph.incident(v).first() else {
            return Vec::new();
        };
        let mut out = vec![start];
        let mut h = self.succ(start);
        while h != start && out.len() <= self.graph.degree(v) {
            out.push(h);
            h = self.succ(h);
        }
        out
    }

    /// A half-edge on the unbounded face, if one has been marked.
    #[inline]
    pub fn outer_half_edge(&self) -> Option<HalfEdgeId> {
        self.outer
    }

    pub fn set_outer_face(&mut self, h: HalfEdgeId) -> Result<()> {
        if h.0 >= self.graph.num_half_edges() {
            return Err(PlanarError::UnknownEdge(h.edge()));
        }
        self.outer = Some(h);
        Ok(())
    }

    /// Check that the rotation at every vertex is a single cycle over exactly its
    /// outgoing half-edges, and that `pred` inverts `succ`.
    pub fn validate(&self) -> Result<()> {
        let g = &self.graph;
        if self.rotation.len() != g.num_half_edges() {
            return Err(PlanarError::InvalidRotation {
                node: NodeId(0),
                reason: format!(
                    "rotation covers {} half-edges, graph has {}",
                    self.rotation.len(),
                    g.num_half_edges()
                ),
            });
        }
        for v in g.nodes() {
            let incident = g.incident(v);
            let Some(&start) = incident.first() else {
                continue;
            };
            let mut h = start;
            for step in 0..incident.len() {
                if g.origin(h) != v {
                    return Err(PlanarError::InvalidRotation {
                        node: v,
                        reason: format!("successor {} leaves node {}", h, g.origin(h)),
                    });
                }
                if self.pred(self.succ(h)) != h {
                    return Err(PlanarError::InvalidRotation {
                        node: v,
                        reason: format!("pred does not invert succ at {}", h),
                    });
                }
                h = self.succ(h);
                if h == start && step + 1 < incident.len() {
                    return Err(PlanarError::InvalidRotation {
                        node: v,
                        reason: format!("cycle closes after {} of {} half-edges", step + 1, incident.len()),
                    });
                }
            }
            if h != start {
                return Err(PlanarError::InvalidRotation {
                    node: v,
                    reason: "rotation does not close into a single cycle".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Insert the chord `i → k` closing the triangle `ij, jk`.
    ///
    /// In `k`'s rotation the new half-edge `(k, i)` follows `(k, j)`; in `i`'s rotation
    /// `(i, k)` precedes `(i, j)`. Afterwards `ij, jk, ki` bound a triangular face and
    /// `ik` continues the rest of the old face.
    pub(crate) fn insert_chord(&mut self, ij: HalfEdgeId, jk: HalfEdgeId) -> Result<EdgeId> {
        let g = &self.graph;
        if g.dest(ij) != g.origin(jk) {
            return Err(PlanarError::Invariant(format!(
                "chord sides {} and {} are not consecutive",
                g.token(ij),
                g.token(jk)
            )));
        }
        let i = g.origin(ij);
        let k = g.dest(jk);
        if i == k {
            return Err(PlanarError::Invariant(format!(
                "chord over {} and {} would be a self-loop",
                g.token(ij),
                g.token(jk)
            )));
        }
        let e = self.graph.add_edge(i, k)?;
        self.rotation.push_edge(e);
        self.rotation.splice_after(jk.twin(), e.backward());
        let before = self.rotation.pred(ij);
        self.rotation.splice_after(before, e.forward());
        Ok(e)
    }
}
