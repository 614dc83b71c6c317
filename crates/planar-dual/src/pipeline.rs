//! Four stages chained: rotation from coordinates, triangulation, orientation, dual.

use nalgebra::Vector2;

use crate::dual::{expanded_dual, DualCfg, ExpandedDual};
use crate::embed::{embed_with_coordinates, plane_triangulate, TriangulateCfg, TriangulationReport};
use crate::error::{PlanarError, Result};
use crate::graph::{Embedding, MultiGraph, NodeId};
use crate::orient::{odd_edge_orientation, Orientation};

#[derive(Clone, Copy, Debug, Default)]
pub struct PipelineCfg {
    pub triangulate: TriangulateCfg,
    pub dual: DualCfg,
    /// Re-check the face parity of the orientation before building the dual.
    pub validate: bool,
}

/// Everything the stages produce; `embedding` is the triangulated one.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub embedding: Embedding,
    pub triangulation: TriangulationReport,
    pub orientation: Orientation,
    pub dual: ExpandedDual,
}

/// Run the full pipeline on `graph` drawn at `pos`.
pub fn run_pipeline<F>(graph: MultiGraph, pos: F, cfg: PipelineCfg) -> Result<PipelineOutput>
where
    F: Fn(NodeId) -> Vector2<f64>,
{
    let span = tracing::debug_span!(
        "pipeline",
        nodes = graph.num_nodes(),
        edges = graph.num_edges()
    );
    let _enter = span.enter();

    let mut embedding = embed_with_coordinates(graph, pos)?;
    let triangulation = plane_triangulate(&mut embedding, cfg.triangulate)?;
    let orientation = odd_edge_orientation(&embedding)?;
    if cfg.validate {
        orientation.check_clockwise_odd(&embedding)?;
    }
    let dual = expanded_dual(&embedding, cfg.dual)?;
    tracing::debug!(
        chords = triangulation.chords.len(),
        dual_nodes = dual.num_nodes(),
        dual_edges = dual.num_edges(),
        "pipeline done"
    );
    Ok(PipelineOutput {
        embedding,
        triangulation,
        orientation,
        dual,
    })
}

/// Slice form of [`run_pipeline`].
pub fn run_pipeline_with_positions(
    graph: MultiGraph,
    positions: &[Vector2<f64>],
    cfg: PipelineCfg,
) -> Result<PipelineOutput> {
    if positions.len() < graph.num_nodes() {
        return Err(PlanarError::InvalidPosition(NodeId(positions.len())));
    }
    run_pipeline(graph, |v| positions[v.0], cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::{draw_grid_instance, GridCfg, ReplayToken};
    use nalgebra::vector;

    fn square() -> (MultiGraph, Vec<Vector2<f64>>) {
        let mut g = MultiGraph::with_nodes(4);
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            g.add_weighted_edge(NodeId(u), NodeId(v), 1.0 + u as f64).unwrap();
        }
        let pts = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        (g, pts)
    }

    #[test]
    fn square_end_to_end() {
        let (g, pts) = square();
        let out = run_pipeline_with_positions(
            g,
            &pts,
            PipelineCfg {
                validate: true,
                ..PipelineCfg::default()
            },
        )
        .unwrap();
        assert_eq!(out.triangulation.chords.len(), 2);
        assert_eq!(out.embedding.graph().num_edges(), 6);
        assert_eq!(out.orientation.len(), 6);
        assert_eq!(out.dual.num_nodes(), 12);
        assert_eq!(out.dual.num_edges(), 18);
        // 1 + 2 + 3 + 4 on the square, chords fall back to 0
        assert!((out.dual.total_weight() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn errors_surface_from_each_stage() {
        let (g, pts) = square();
        assert_eq!(
            run_pipeline_with_positions(g.clone(), &pts[..3], PipelineCfg::default()).unwrap_err(),
            PlanarError::InvalidPosition(NodeId(3))
        );
        let mut small = MultiGraph::with_nodes(2);
        small.add_edge(NodeId(0), NodeId(1)).unwrap();
        assert_eq!(
            run_pipeline_with_positions(small, &pts[..2], PipelineCfg::default()).unwrap_err(),
            PlanarError::TooFewNodes { needed: 3, found: 2 }
        );
    }

    #[test]
    fn pendant_node_on_untouched_outer_face() {
        let mut g = MultiGraph::with_nodes(4);
        for (u, v) in [(0, 1), (1, 2), (2, 0), (1, 3)] {
            g.add_edge(NodeId(u), NodeId(v)).unwrap();
        }
        let pts = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![2.0, 0.0],
        ];
        let bounded = PipelineCfg {
            triangulate: TriangulateCfg {
                scope: crate::embed::FaceScope::Bounded,
            },
            ..PipelineCfg::default()
        };
        assert_eq!(
            run_pipeline_with_positions(g.clone(), &pts, bounded).unwrap_err(),
            PlanarError::PendantNode(NodeId(3))
        );
        let out = run_pipeline_with_positions(g, &pts, PipelineCfg::default()).unwrap();
        assert_eq!(out.embedding.graph().num_edges(), 3 * 4 - 6);
    }

    #[test]
    fn folded_sparse_grid_runs_clean() {
        let mut g = MultiGraph::with_nodes(12);
        for (u, v) in [
            (6, 7),
            (1, 2),
            (10, 11),
            (1, 5),
            (3, 4),
            (5, 8),
            (9, 10),
            (7, 8),
            (4, 8),
            (0, 1),
            (6, 9),
            (1, 3),
            (7, 10),
            (4, 7),
            (4, 5),
        ] {
            g.add_edge(NodeId(u), NodeId(v)).unwrap();
        }
        let pts: Vec<_> = (0..12)
            .map(|v| vector![(v % 3) as f64, (v / 3) as f64])
            .collect();
        let out = run_pipeline_with_positions(
            g,
            &pts,
            PipelineCfg {
                validate: true,
                ..PipelineCfg::default()
            },
        )
        .unwrap();
        let faces = out.embedding.faces();
        assert!(faces.ids().all(|f| faces.boundary_len(f) == 3));
        assert_eq!(out.embedding.graph().num_edges(), 3 * 12 - 6);
        assert_eq!(out.dual.num_edges(), 3 * (3 * 12 - 6));
    }

    #[test]
    fn grid_instances_run_clean() {
        for index in 0..10 {
            let inst = draw_grid_instance(GridCfg::default(), ReplayToken { seed: 5, index }).unwrap();
            let m = inst.graph.num_edges();
            let out = run_pipeline_with_positions(
                inst.graph,
                &inst.positions,
                PipelineCfg {
                    validate: true,
                    ..PipelineCfg::default()
                },
            )
            .unwrap();
            let m_tri = out.embedding.graph().num_edges();
            assert!(m_tri >= m);
            // plane triangulation on n >= 3 nodes has 3n - 6 edges
            assert_eq!(m_tri, 3 * 16 - 6);
            assert_eq!(out.dual.num_edges(), 3 * m_tri);
        }
    }
}
