//! Embedded multigraph: storage, rotation system and face traversal.
//!
//! Purpose
//! - Hold an undirected multigraph whose parallel edges carry stable keys, together
//!   with the rotation system that fixes its planar embedding.
//! - Provide the face walk every later stage relies on.
//!
//! Layout
//! - `types`: dense ids and the `(from, to, key)` edge token.
//! - `multigraph`: append-only edge arena with incidence lists.
//! - `embedding`: rotation (`succ`/`pred` per half-edge) and chord insertion.
//! - `faces`: on-demand face enumeration.
//! - `connectivity`: connected / biconnected checks.

mod connectivity;
mod embedding;
mod faces;
mod multigraph;
mod types;

pub use connectivity::{first_unreached, is_biconnected, is_connected};
pub use embedding::{Embedding, Rotation};
pub use faces::{FaceId, FaceWalk, Faces};
pub use multigraph::MultiGraph;
pub use types::{Edge, EdgeId, EdgeRecord, HalfEdgeId, NodeId};

#[cfg(test)]
mod tests;
