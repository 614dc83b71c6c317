//! Planar multigraph preprocessing for Pfaffian-based exact solvers.
//!
//! Stages, in pipeline order:
//! - `embed`: rotation system from coordinates, then chord insertion until every
//!   face is a triangle.
//! - `orient`: clockwise-odd (Pfaffian) orientation of the triangulated embedding.
//! - `dual`: expanded dual graph on half-edges, handed to the matching solver.
//!
//! `graph` holds the multigraph and rotation-system storage the stages share;
//! `pipeline` chains the stages; `rand` draws reproducible test instances.
//!
//! API Policy
//! - Internal crate with no stable public API; breaking changes are fine when they
//!   make the stages clearer.

pub mod dual;
pub mod embed;
pub mod error;
pub mod graph;
pub mod orient;
pub mod pipeline;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{PlanarError, Result};
pub use pipeline::{run_pipeline, run_pipeline_with_positions, PipelineCfg, PipelineOutput};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dual::{expanded_dual, DualCfg, DualEdge, DualEdgeKind, ExpandedDual};
    pub use crate::embed::{
        embed_with_coordinates, embed_with_positions, plane_triangulate, FaceScope,
        TriangulateCfg, TriangulationReport,
    };
    pub use crate::error::{PlanarError, Result};
    pub use crate::graph::{Edge, EdgeId, Embedding, FaceId, Faces, HalfEdgeId, MultiGraph, NodeId};
    pub use crate::orient::{odd_edge_orientation, Orientation};
    pub use crate::pipeline::{run_pipeline, run_pipeline_with_positions, PipelineCfg, PipelineOutput};
    pub use crate::rand::{draw_grid_instance, GridCfg, PlanarInstance, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
