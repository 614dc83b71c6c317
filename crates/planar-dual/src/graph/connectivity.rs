//! Connectivity checks (iterative, no recursion-depth limits).

use super::multigraph::MultiGraph;
use super::types::{EdgeId, NodeId};

/// First node (by id) not reachable from node 0, if any.
pub fn first_unreached(g: &MultiGraph) -> Option<NodeId> {
    if g.num_nodes() == 0 {
        return None;
    }
    let mut seen = vec![false; g.num_nodes()];
    let mut stack = vec![NodeId(0)];
    seen[0] = true;
    while let Some(v) = stack.pop() {
        for &h in g.incident(v) {
            let w = g.dest(h);
            if !seen[w.0] {
                seen[w.0] = true;
                stack.push(w);
            }
        }
    }
    seen.iter().position(|&s| !s).map(NodeId)
}

pub fn is_connected(g: &MultiGraph) -> bool {
    first_unreached(g).is_none()
}

/// Connected and free of cut vertices (Hopcroft–Tarjan low-points).
///
/// Graphs with fewer than three nodes count as biconnected when connected.
pub fn is_biconnected(g: &MultiGraph) -> bool {
    let n = g.num_nodes();
    if n == 0 {
        return true;
    }
    const UNSEEN: usize = usize::MAX;
    let mut disc = vec![UNSEEN; n];
    let mut low = vec![0usize; n];
    let mut time = 1usize;
    let mut root_children = 0usize;
    // (node, tree edge used to enter it, next incident index)
    let mut stack: Vec<(NodeId, Option<EdgeId>, usize)> = vec![(NodeId(0), None, 0)];
    disc[0] = 0;
    low[0] = 0;

    while let Some(top) = stack.last_mut() {
        let (v, parent_edge, idx) = *top;
        if let Some(&h) = g.incident(v).get(idx) {
            top.2 += 1;
            if Some(h.edge()) == parent_edge {
                continue;
            }
            let w = g.dest(h);
            if disc[w.0] == UNSEEN {
                disc[w.0] = time;
                low[w.0] = time;
                time += 1;
                if v.0 == 0 {
                    root_children += 1;
                }
                stack.push((w, Some(h.edge()), 0));
            } else {
                low[v.0] = low[v.0].min(disc[w.0]);
            }
        } else {
            stack.pop();
            if let Some(&(p, _, _)) = stack.last() {
                low[p.0] = low[p.0].min(low[v.0]);
                if p.0 != 0 && low[v.0] >= disc[p.0] {
                    return false;
                }
            }
        }
    }
    disc.iter().all(|&d| d != UNSEEN) && root_children <= 1
}
