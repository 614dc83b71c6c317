//! Expanded dual graph handed to the matching solver.
//!
//! Nodes are the directed-edge tokens of the triangulated embedding; edges are the
//! crossing relation (weighted) and the wedge relation around faces (weight zero).

mod build;
mod matching;
mod types;

pub use build::{expanded_dual, DualCfg};
pub use types::{DualEdge, DualEdgeKind, ExpandedDual};

#[cfg(test)]
mod tests;
