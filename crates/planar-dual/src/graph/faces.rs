//! Faces are never stored on the embedding; they are traced on demand.

use std::fmt;

use super::embedding::Embedding;
use super::types::HalfEdgeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Iterator over the half-edges of one face, starting at `start` and stopping just
/// before it comes around again.
pub struct FaceWalk<'a> {
    emb: &'a Embedding,
    start: HalfEdgeId,
    current: HalfEdgeId,
    done: bool,
}

impl<'a> FaceWalk<'a> {
    pub(crate) fn new(emb: &'a Embedding, start: HalfEdgeId) -> Self {
        Self {
            emb,
            start,
            current: start,
            done: false,
        }
    }
}

impl<'a> Iterator for FaceWalk<'a> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        if self.done {
            return None;
        }
        let h = self.current;
        self.current = self.emb.face_next(h);
        if self.current == self.start {
            self.done = true;
        }
        Some(h)
    }
}

/// Snapshot of the face structure: which face lies to the left of each half-edge.
///
/// Faces are numbered in order of their smallest half-edge. The snapshot goes stale
/// as soon as the embedding gains an edge.
#[derive(Clone, Debug)]
pub struct Faces {
    face_of: Vec<FaceId>,
    starts: Vec<HalfEdgeId>,
    lengths: Vec<usize>,
}

impl Faces {
    pub fn new(emb: &Embedding) -> Self {
        let m2 = emb.graph().num_half_edges();
        let mut face_of = vec![FaceId(usize::MAX); m2];
        let mut starts = Vec::new();
        let mut lengths = Vec::new();
        for h in (0..m2).map(HalfEdgeId) {
            if face_of[h.0].0 != usize::MAX {
                continue;
            }
            let f = FaceId(starts.len());
            let mut len = 0;
            for x in emb.face_walk(h) {
                face_of[x.0] = f;
                len += 1;
            }
            starts.push(h);
            lengths.push(len);
        }
        Self {
            face_of,
            starts,
            lengths,
        }
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
    pub fn ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.len()).map(FaceId)
    }

    #[inline]
    pub fn face_of(&self, h: HalfEdgeId) -> FaceId {
        self.face_of[h.0]
    }
    #[inline]
    pub fn start(&self, f: FaceId) -> HalfEdgeId {
        self.starts[f.0]
    }
    /// Number of boundary half-edges of `f` (a bridge inside a face counts twice).
    #[inline]
    pub fn boundary_len(&self, f: FaceId) -> usize {
        self.lengths[f.0]
    }

    pub fn boundary<'a>(&self, emb: &'a Embedding, f: FaceId) -> FaceWalk<'a> {
        emb.face_walk(self.starts[f.0])
    }

    /// The face holding the embedding's outer marker.
    pub fn outer(&self, emb: &Embedding) -> Option<FaceId> {
        emb.outer_half_edge().map(|h| self.face_of(h))
    }

    /// Faces other than the marked outer one (all faces if nothing is marked).
    pub fn bounded(&self, emb: &Embedding) -> Vec<FaceId> {
        let outer = self.outer(emb);
        self.ids().filter(|&f| Some(f) != outer).collect()
    }
}
