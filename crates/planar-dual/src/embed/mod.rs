//! Geometric embedding and triangulation.
//!
//! - `coords`: rotation system from node coordinates (polar-angle sort) and outer
//!   face detection by signed area.
//! - `triangulate`: in-place chord insertion turning every face into a triangle.

mod coords;
mod triangulate;

pub use coords::{embed_with_coordinates, embed_with_positions, rotation_from_coordinates};
pub use triangulate::{plane_triangulate, FaceScope, TriangulateCfg, TriangulationReport};
