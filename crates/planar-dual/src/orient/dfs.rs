//! Spanning-tree pass: DFS from node 0, then orient edges in reverse discovery order.

use crate::error::{PlanarError, Result};
use crate::graph::{EdgeId, Embedding, MultiGraph, NodeId};

use super::parity::complete_face_parity;
use super::types::Orientation;

/// Orient every edge of a triangulated embedding so each bounded face has an odd
/// number of clockwise edges.
///
/// Deterministic: the result depends only on node numbering, incident-list order and
/// the rotation system.
pub fn odd_edge_orientation(emb: &Embedding) -> Result<Orientation> {
    let g = emb.graph();
    if g.num_nodes() == 0 {
        return Ok(Orientation::from_heads(Vec::new()));
    }
    let tree = dfs_tree_edges(g)?;
    let mut pass = TreePass::new(g);
    for &(r, s) in tree.iter().rev() {
        pass.orient_tree_edge(r, s)?;
        pass.drain(s);
    }
    if let Some(e) = pass.consumed.iter().position(|&c| !c) {
        return Err(PlanarError::Invariant(format!(
            "edge {} left unoriented by the tree pass",
            g.token(EdgeId(e).forward())
        )));
    }
    let TreePass {
        mut heads, is_tree, ..
    } = pass;
    let resolved = complete_face_parity(emb, &is_tree, &mut heads)?;
    tracing::debug!(
        edges = g.num_edges(),
        tree_edges = tree.len(),
        parity_fixes = resolved,
        "oriented"
    );
    Ok(Orientation::from_heads(heads))
}

/// Tree edges `(parent, child)` in discovery order.
///
/// Neighbours are tried in incident-list order, so the tree is the one a recursive
/// DFS would produce.
pub(crate) fn dfs_tree_edges(g: &MultiGraph) -> Result<Vec<(NodeId, NodeId)>> {
    let n = g.num_nodes();
    let mut seen = vec![false; n];
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    // (node, next incident index)
    let mut stack: Vec<(NodeId, usize)> = vec![(NodeId(0), 0)];
    seen[0] = true;
    while let Some(top) = stack.last_mut() {
        let (u, idx) = *top;
        match g.incident(u).get(idx) {
            Some(&h) => {
                top.1 += 1;
                let v = g.dest(h);
                if !seen[v.0] {
                    seen[v.0] = true;
                    tree.push((u, v));
                    stack.push((v, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    if let Some(v) = seen.iter().position(|&s| !s) {
        return Err(PlanarError::Disconnected {
            unreached: NodeId(v),
        });
    }
    Ok(tree)
}

struct TreePass<'a> {
    g: &'a MultiGraph,
    heads: Vec<NodeId>,
    consumed: Vec<bool>,
    is_tree: Vec<bool>,
    visited: Vec<bool>,
}

impl<'a> TreePass<'a> {
    fn new(g: &'a MultiGraph) -> Self {
        let m = g.num_edges();
        Self {
            g,
            heads: vec![NodeId(usize::MAX); m],
            consumed: vec![false; m],
            is_tree: vec![false; m],
            visited: vec![false; g.num_nodes()],
        }
    }

    /// Orient the lowest-key edge between `r` and `s`.
    fn orient_tree_edge(&mut self, r: NodeId, s: NodeId) -> Result<()> {
        let e = *self.g.parallel_edges(r, s).first().ok_or_else(|| {
            PlanarError::Invariant(format!("tree edge {r}-{s} has no graph edge"))
        })?;
        if self.consumed[e.0] {
            return Err(PlanarError::Invariant(format!(
                "tree edge {} was consumed early",
                self.g.token(e.forward())
            )));
        }
        let head = if self.visited[s.0] {
            r
        } else {
            self.visited[s.0] = true;
            s
        };
        self.set(e, head);
        self.is_tree[e.0] = true;
        Ok(())
    }

    /// Orient every unconsumed edge at `s`: toward `s` if the far end is already
    /// visited, else toward the far end (which becomes visited).
    fn drain(&mut self, s: NodeId) {
        let g = self.g;
        for &h in g.incident(s) {
            let e = h.edge();
            if self.consumed[e.0] {
                continue;
            }
            let v = g.dest(h);
            let head = if self.visited[v.0] {
                s
            } else {
                self.visited[v.0] = true;
                v
            };
            self.set(e, head);
        }
    }

    #[inline]
    fn set(&mut self, e: EdgeId, head: NodeId) {
        self.heads[e.0] = head;
        self.consumed[e.0] = true;
    }
}
