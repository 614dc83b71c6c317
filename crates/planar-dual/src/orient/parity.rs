//! Face-parity pass.
//!
//! After the tree pass the non-tree edges form a spanning tree of the dual rooted at
//! the unbounded face. Peeling that tree from its leaves, each bounded face has one
//! undecided edge left when it is reached, and that edge alone fixes the face's parity.

use std::collections::VecDeque;

use crate::error::{PlanarError, Result};
use crate::graph::{EdgeId, Embedding, FaceId, Faces, HalfEdgeId, NodeId};

/// The face left out of the parity condition: the marked outer face, or the face
/// of `EdgeId(0).forward()` on embeddings without a marker.
pub(crate) fn unbounded_face(emb: &Embedding, faces: &Faces) -> Option<FaceId> {
    faces.outer(emb).or_else(|| {
        (emb.graph().num_edges() > 0).then(|| faces.face_of(EdgeId(0).forward()))
    })
}

/// Re-orient the non-tree edges so every bounded face has an odd clockwise count.
/// Returns how many edges were decided here.
pub(crate) fn complete_face_parity(
    emb: &Embedding,
    is_tree: &[bool],
    heads: &mut [NodeId],
) -> Result<usize> {
    let g = emb.graph();
    let faces = emb.faces();
    let Some(outer) = unbounded_face(emb, &faces) else {
        return Ok(0);
    };
    let mut pending = vec![0usize; faces.len()];
    for h in (0..g.num_half_edges()).map(HalfEdgeId) {
        if !is_tree[h.edge().0] {
            pending[faces.face_of(h).0] += 1;
        }
    }
    pending[outer.0] = 0;

    let mut resolved = vec![false; g.num_edges()];
    let mut queue: VecDeque<FaceId> = faces.ids().filter(|f| pending[f.0] == 1).collect();
    let mut count = 0usize;
    while let Some(f) = queue.pop_front() {
        if pending[f.0] != 1 {
            continue;
        }
        let mut open = None;
        let mut clockwise = 0usize;
        for h in faces.boundary(emb, f) {
            let e = h.edge();
            if !is_tree[e.0] && !resolved[e.0] {
                open = Some(h);
            } else if heads[e.0] == g.dest(h) {
                clockwise += 1;
            }
        }
        let h = open.ok_or_else(|| {
            PlanarError::Invariant(format!("face {f} lost its undecided edge"))
        })?;
        // bounded faces are walked clockwise, so along the walk counts
        heads[h.edge().0] = if clockwise % 2 == 0 {
            g.dest(h)
        } else {
            g.origin(h)
        };
        resolved[h.edge().0] = true;
        pending[f.0] = 0;
        count += 1;

        let other = faces.face_of(h.twin());
        if other != outer && other != f {
            pending[other.0] = pending[other.0].saturating_sub(1);
            if pending[other.0] == 1 {
                queue.push_back(other);
            }
        }
    }

    if let Some(e) = g
        .edge_ids()
        .find(|e| !is_tree[e.0] && !resolved[e.0])
    {
        return Err(PlanarError::Invariant(format!(
            "edge {} has no face to fix its parity (is the embedding triangulated and planar?)",
            g.token(e.forward())
        )));
    }
    Ok(count)
}
