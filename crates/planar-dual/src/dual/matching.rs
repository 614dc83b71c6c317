//! Perfect matchings of the expanded dual and the cuts they encode.
//!
//! Each perfect matching corresponds to one set of original edges (a cut of the
//! triangulated graph): the edges whose crossing dual edge is left unmatched.

use crate::error::{PlanarError, Result};
use crate::graph::{EdgeId, HalfEdgeId};

use super::types::{DualEdgeKind, ExpandedDual};

impl ExpandedDual {
    /// Check that `matching` is a perfect matching made of dual edges.
    pub fn is_perfect_matching(&self, matching: &[(HalfEdgeId, HalfEdgeId)]) -> Result<()> {
        let nodes = self.num_nodes();
        let expected = nodes / 2;
        if matching.len() != expected {
            return Err(PlanarError::NotPerfect {
                nodes,
                expected,
                found: matching.len(),
            });
        }
        let mut covered = vec![false; nodes];
        for &(a, b) in matching {
            if self.find(a, b).is_none() {
                return Err(PlanarError::NotADualEdge(a, b));
            }
            for h in [a, b] {
                if std::mem::replace(&mut covered[h.0], true) {
                    return Err(PlanarError::MatchedTwice(h));
                }
            }
        }
        Ok(())
    }

    /// Original edges whose crossing edge is not in `matching`, in id order.
    pub fn cut_from_matching(&self, matching: &[(HalfEdgeId, HalfEdgeId)]) -> Result<Vec<EdgeId>> {
        self.is_perfect_matching(matching)?;
        let mut matched = vec![false; self.num_nodes() / 2];
        for &(a, b) in matching {
            if let Some(DualEdgeKind::Crossing(e)) = self.find(a, b).map(|d| d.kind) {
                matched[e.0] = true;
            }
        }
        Ok(self
            .edges()
            .iter()
            .filter_map(|d| match d.kind {
                DualEdgeKind::Crossing(e) if !matched[e.0] => Some(e),
                _ => None,
            })
            .collect())
    }
}
