//! Face-by-face chord insertion until every face is a triangle.

use crate::error::{PlanarError, Result};
use crate::graph::{EdgeId, Embedding, HalfEdgeId, NodeId};

/// Which faces get triangulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FaceScope {
    /// Every face, the unbounded one included (plane triangulation).
    #[default]
    All,
    /// Every face except the one carrying the embedding's outer marker.
    Bounded,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TriangulateCfg {
    pub scope: FaceScope,
}

/// Chords added by one run, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangulationReport {
    pub chords: Vec<EdgeId>,
}

/// Insert chords in place until every face in scope has three sides.
///
/// For every half-edge `ij` present when its origin is visited, walk its face
/// `i → j → k → l → …` and cut off triangles `(i, j, k)` with chords `ik` until the
/// remaining polygon closes. When `i == k` the walk first advances one step so that
/// no chord is a loop. A face that folds back onto itself around a pendant path stops
/// that walk early; a second sweep cuts such faces down corner by corner.
///
/// Errors leave the embedding partially triangulated; discard it.
pub fn plane_triangulate(emb: &mut Embedding, cfg: TriangulateCfg) -> Result<TriangulationReport> {
    let n = emb.graph().num_nodes();
    if n < 3 {
        return Err(PlanarError::TooFewNodes { needed: 3, found: n });
    }
    let mut skip = Vec::new();
    if cfg.scope == FaceScope::Bounded {
        let outer = emb.outer_half_edge().ok_or(PlanarError::MissingOuterFace)?;
        skip = vec![false; emb.graph().num_half_edges()];
        for h in emb.face_walk(outer) {
            skip[h.0] = true;
        }
    }

    let edges_before = emb.graph().num_edges();
    let mut report = TriangulationReport::default();
    for i in 0..n {
        let snapshot = emb.graph().incident(NodeId(i)).to_vec();
        for ij in snapshot {
            if skip.get(ij.0).copied().unwrap_or(false) {
                continue;
            }
            close_face(emb, ij, &mut report.chords)?;
        }
    }
    let reopened = finish_open_faces(emb, &skip, &mut report.chords)?;
    tracing::debug!(
        scope = ?cfg.scope,
        edges_before,
        chords = report.chords.len(),
        reopened,
        "triangulated"
    );
    Ok(report)
}

fn close_face(emb: &mut Embedding, start: HalfEdgeId, chords: &mut Vec<EdgeId>) -> Result<()> {
    let budget = emb.graph().num_half_edges();
    let mut ij = start;
    let mut jk = emb.face_next(ij);
    let mut kl = emb.face_next(jk);
    let mut steps = 0usize;
    loop {
        let g = emb.graph();
        let (i, j, l) = (g.origin(ij), g.dest(ij), g.dest(kl));
        if l == i {
            return Ok(());
        }
        // the polygon folds back onto j: nothing left to cut here
        if g.dest(emb.face_next(kl)) == j {
            return Ok(());
        }
        steps += 1;
        if steps > budget {
            return Err(PlanarError::Invariant(format!(
                "face of {} did not close after {} chords",
                g.token(start),
                budget
            )));
        }
        if i == g.dest(jk) {
            ij = jk;
            jk = kl;
            kl = emb.face_next(jk);
        }
        let e = emb.insert_chord(ij, jk)?;
        tracing::trace!(chord = %emb.graph().token(e.forward()), "inserted chord");
        chords.push(e);
        ij = kl;
        jk = emb.face_next(ij);
        kl = emb.face_next(jk);
    }
}

/// Cut every face in scope that still has more than three sides. Returns how many
/// faces needed it.
fn finish_open_faces(
    emb: &mut Embedding,
    skip: &[bool],
    chords: &mut Vec<EdgeId>,
) -> Result<usize> {
    let mut reopened = 0usize;
    loop {
        let faces = emb.faces();
        let open = faces.ids().map(|f| faces.start(f)).find(|&h| {
            emb.face_walk(h).nth(3).is_some()
                && !emb
                    .face_walk(h)
                    .any(|x| skip.get(x.0).copied().unwrap_or(false))
        });
        let Some(start) = open else {
            return Ok(reopened);
        };
        cut_corners(emb, start, chords)?;
        reopened += 1;
    }
}

/// Cut triangles off the face of `start` at the first corner `i → j → k` with
/// `i != k` until three sides remain.
fn cut_corners(emb: &mut Embedding, start: HalfEdgeId, chords: &mut Vec<EdgeId>) -> Result<()> {
    let mut h = start;
    loop {
        let walk: Vec<HalfEdgeId> = emb.face_walk(h).collect();
        if walk.len() <= 3 {
            return Ok(());
        }
        let g = emb.graph();
        let ij = walk
            .iter()
            .copied()
            .find(|&x| g.origin(x) != g.dest(emb.face_next(x)))
            .ok_or_else(|| {
                PlanarError::Invariant(format!(
                    "face of {} has {} sides and no corner to cut",
                    g.token(start),
                    walk.len()
                ))
            })?;
        let jk = emb.face_next(ij);
        let rest = emb.face_next(jk);
        let e = emb.insert_chord(ij, jk)?;
        tracing::trace!(chord = %emb.graph().token(e.forward()), "inserted chord on reopened face");
        chords.push(e);
        h = rest;
    }
}
