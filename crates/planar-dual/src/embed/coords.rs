//! Rotation system from a straight-line drawing.

use nalgebra::Vector2;
use std::cmp::Ordering;

use crate::error::{PlanarError, Result};
use crate::graph::{Embedding, Faces, HalfEdgeId, MultiGraph, NodeId, Rotation};

/// Sort the half-edges leaving each node by the polar angle of their far endpoint.
///
/// Angles come from `atan2(Δy, Δx)` and increase counterclockwise. The sort is
/// stable, so exactly equal angles keep incident-list (insertion) order.
pub fn rotation_from_coordinates<F>(graph: &MultiGraph, pos: F) -> Result<Rotation>
where
    F: Fn(NodeId) -> Vector2<f64>,
{
    let points = collect_points(graph, pos)?;
    let orders: Vec<Vec<HalfEdgeId>> = graph
        .nodes()
        .map(|u| {
            let p0 = points[u.0];
            let mut circle: Vec<(f64, HalfEdgeId)> = graph
                .incident(u)
                .iter()
                .map(|&h| {
                    let d = points[graph.dest(h).0] - p0;
                    (d.y.atan2(d.x), h)
                })
                .collect();
            circle.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
            circle.into_iter().map(|(_, h)| h).collect()
        })
        .collect();
    Rotation::from_cyclic_orders(graph, &orders)
}

/// Embed `graph` from node coordinates and mark the unbounded face.
///
/// The unbounded face is the one whose boundary walk has the largest signed area:
/// bounded faces are walked clockwise (negative area), the outer one counterclockwise.
pub fn embed_with_coordinates<F>(graph: MultiGraph, pos: F) -> Result<Embedding>
where
    F: Fn(NodeId) -> Vector2<f64>,
{
    let points = collect_points(&graph, pos)?;
    let rotation = rotation_from_coordinates(&graph, |v| points[v.0])?;
    let mut emb = Embedding::new(graph, rotation)?;
    let faces = Faces::new(&emb);
    let outer = faces
        .ids()
        .map(|f| {
            let area: f64 = faces
                .boundary(&emb, f)
                .map(|h| {
                    let a = points[emb.graph().origin(h).0];
                    let b = points[emb.graph().dest(h).0];
                    a.x * b.y - a.y * b.x
                })
                .sum();
            (0.5 * area, faces.start(f))
        })
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    if let Some((area, h)) = outer {
        tracing::debug!(faces = faces.len(), outer_area = area, "embedded from coordinates");
        emb.set_outer_face(h)?;
    }
    Ok(emb)
}

/// Slice form of [`embed_with_coordinates`]: `positions[v]` is the point of node `v`.
pub fn embed_with_positions(graph: MultiGraph, positions: &[Vector2<f64>]) -> Result<Embedding> {
    if positions.len() < graph.num_nodes() {
        return Err(PlanarError::InvalidPosition(NodeId(positions.len())));
    }
    embed_with_coordinates(graph, |v| positions[v.0])
}

fn collect_points<F>(graph: &MultiGraph, pos: F) -> Result<Vec<Vector2<f64>>>
where
    F: Fn(NodeId) -> Vector2<f64>,
{
    graph
        .nodes()
        .map(|v| {
            let p = pos(v);
            if p.x.is_finite() && p.y.is_finite() {
                Ok(p)
            } else {
                Err(PlanarError::InvalidPosition(v))
            }
        })
        .collect()
}
