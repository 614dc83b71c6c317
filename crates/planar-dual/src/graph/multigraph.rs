//! Append-only undirected multigraph with stable parallel-edge keys.

use std::collections::HashMap;

use super::types::{Edge, EdgeId, EdgeRecord, HalfEdgeId, NodeId};
use crate::error::{PlanarError, Result};

/// Undirected multigraph over dense node ids.
///
/// Invariants:
/// - edges are never removed, so `EdgeId`s and keys stay valid forever;
/// - the key of an edge joining `{u, v}` is its position among the edges joining that
///   pair, hence unique for the pair and increasing with insertion;
/// - `incident[v]` lists half-edges leaving `v` in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MultiGraph {
    edges: Vec<EdgeRecord>,
    incident: Vec<Vec<HalfEdgeId>>,
    by_pair: HashMap<(NodeId, NodeId), Vec<EdgeId>>,
}

impl MultiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `n` isolated nodes `0..n`.
    pub fn with_nodes(n: usize) -> Self {
        Self {
            edges: Vec::new(),
            incident: vec![Vec::new(); n],
            by_pair: HashMap::new(),
        }
    }

    pub fn add_node(&mut self) -> NodeId {
        self.incident.push(Vec::new());
        NodeId(self.incident.len() - 1)
    }

    pub fn num_nodes(&self) -> usize {
        self.incident.len()
    }
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
    pub fn num_half_edges(&self) -> usize {
        2 * self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.num_nodes()).map(NodeId)
    }
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.num_edges()).map(EdgeId)
    }

    /// Insert an unweighted edge; returns its id. The key is `self.record(id).key`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<EdgeId> {
        self.insert(u, v, None)
    }

    pub fn add_weighted_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<EdgeId> {
        self.insert(u, v, Some(weight))
    }

    fn insert(&mut self, u: NodeId, v: NodeId, weight: Option<f64>) -> Result<EdgeId> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(PlanarError::SelfLoop(u));
        }
        let id = EdgeId(self.edges.len());
        let parallel = self.by_pair.entry(pair(u, v)).or_default();
        let key = parallel.len() as u32;
        parallel.push(id);
        self.edges.push(EdgeRecord {
            ends: [u, v],
            key,
            weight,
        });
        self.incident[u.0].push(id.forward());
        self.incident[v.0].push(id.backward());
        Ok(id)
    }

    pub fn check_node(&self, v: NodeId) -> Result<()> {
        if v.0 < self.num_nodes() {
            Ok(())
        } else {
            Err(PlanarError::NodeOutOfRange {
                node: v,
                num_nodes: self.num_nodes(),
            })
        }
    }

    #[inline]
    pub fn record(&self, e: EdgeId) -> &EdgeRecord {
        &self.edges[e.0]
    }

    pub fn set_weight(&mut self, e: EdgeId, weight: f64) -> Result<()> {
        let rec = self
            .edges
            .get_mut(e.0)
            .ok_or(PlanarError::UnknownEdge(e))?;
        rec.weight = Some(weight);
        Ok(())
    }

    /// Vertex the half-edge leaves.
    #[inline]
    pub fn origin(&self, h: HalfEdgeId) -> NodeId {
        self.edges[h.edge().0].ends[h.dir()]
    }

    /// Vertex the half-edge reaches.
    #[inline]
    pub fn dest(&self, h: HalfEdgeId) -> NodeId {
        self.edges[h.edge().0].ends[1 - h.dir()]
    }

    #[inline]
    pub fn token(&self, h: HalfEdgeId) -> Edge {
        let rec = &self.edges[h.edge().0];
        Edge::new(rec.ends[h.dir()], rec.ends[1 - h.dir()], rec.key)
    }

    /// Half-edges leaving `v`, in insertion order.
    #[inline]
    pub fn incident(&self, v: NodeId) -> &[HalfEdgeId] {
        &self.incident[v.0]
    }

    #[inline]
    pub fn degree(&self, v: NodeId) -> usize {
        self.incident[v.0].len()
    }

    /// Edges joining `u` and `v`, indexed by key.
    pub fn parallel_edges(&self, u: NodeId, v: NodeId) -> &[EdgeId] {
        self.by_pair
            .get(&pair(u, v))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve a directed token to its half-edge.
    pub fn half_edge(&self, edge: Edge) -> Option<HalfEdgeId> {
        let id = *self.parallel_edges(edge.from, edge.to).get(edge.key as usize)?;
        let rec = &self.edges[id.0];
        Some(if rec.ends[0] == edge.from {
            id.forward()
        } else {
            id.backward()
        })
    }

    /// Every undirected edge once, in its stored direction.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_ids().map(|e| self.token(e.forward()))
    }
}

#[inline]
fn pair(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
