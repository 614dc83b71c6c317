use super::*;
use crate::embed::{embed_with_positions, plane_triangulate, TriangulateCfg};
use crate::error::PlanarError;
use crate::graph::{Edge, EdgeId, Embedding, HalfEdgeId, MultiGraph, NodeId};
use nalgebra::{vector, Vector2};

fn embed(points: &[Vector2<f64>], edges: &[(usize, usize)]) -> Embedding {
    let mut g = MultiGraph::with_nodes(points.len());
    for &(u, v) in edges {
        g.add_edge(NodeId(u), NodeId(v)).unwrap();
    }
    embed_with_positions(g, points).unwrap()
}

fn triangle() -> Embedding {
    embed(
        &[vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]],
        &[(0, 1), (1, 2), (2, 0)],
    )
}

fn triangulated_square() -> Embedding {
    let mut emb = embed(
        &[
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ],
        &[(0, 1), (1, 2), (2, 3), (3, 0)],
    );
    plane_triangulate(&mut emb, TriangulateCfg::default()).unwrap();
    emb
}

fn h(i: usize) -> HalfEdgeId {
    HalfEdgeId(i)
}

/// Every perfect matching, by brute force over edge subsets.
fn all_perfect_matchings(dual: &ExpandedDual) -> Vec<Vec<(HalfEdgeId, HalfEdgeId)>> {
    let pairs: Vec<_> = dual.edges().iter().map(|d| d.ends()).collect();
    let mut out = Vec::new();
    for mask in 0u32..(1 << pairs.len()) {
        if mask.count_ones() as usize != dual.num_nodes() / 2 {
            continue;
        }
        let chosen: Vec<_> = (0..pairs.len())
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| pairs[i])
            .collect();
        if dual.is_perfect_matching(&chosen).is_ok() {
            out.push(chosen);
        }
    }
    out
}

#[test]
fn triangle_dual_shape() {
    let emb = triangle();
    let dual = expanded_dual(&emb, DualCfg::default()).unwrap();
    assert_eq!(dual.num_nodes(), 6);
    assert_eq!(dual.num_edges(), 9);
    let crossings = dual
        .edges()
        .iter()
        .filter(|d| matches!(d.kind, DualEdgeKind::Crossing(_)))
        .count();
    assert_eq!(crossings, 3);
    // every dual node has degree 3: one crossing, two wedges
    for n in dual.nodes() {
        let deg = dual
            .edges()
            .iter()
            .filter(|d| d.a == n || d.b == n)
            .count();
        assert_eq!(deg, 3, "node {}", dual.token(n));
    }
    assert!(dual.find(h(0), h(4)).is_some());
    assert!(dual.find(h(0), h(3)).is_none());
}

#[test]
fn square_dual_counts_and_weights() {
    let mut emb = triangulated_square();
    emb.set_weight(EdgeId(0), 2.5).unwrap();
    let dual = expanded_dual(
        &emb,
        DualCfg {
            default_weight: 1.0,
        },
    )
    .unwrap();
    assert_eq!(dual.num_nodes(), 12);
    assert_eq!(dual.num_edges(), 18);
    assert_eq!(dual.crossing(EdgeId(0)).unwrap().weight, 2.5);
    assert_eq!(dual.crossing(EdgeId(4)).unwrap().weight, 1.0);
    assert!((dual.total_weight() - 7.5).abs() < 1e-12);
    for d in dual.edges() {
        if let DualEdgeKind::Wedge { around } = d.kind {
            assert_eq!(d.weight, 0.0);
            assert_eq!(emb.graph().origin(d.a), around);
        }
    }
}

#[test]
fn tokens_round_trip_to_nodes() {
    let emb = triangulated_square();
    let dual = expanded_dual(&emb, DualCfg::default()).unwrap();
    assert_eq!(dual.node_of(Edge::new(NodeId(0), NodeId(1), 0)), Some(h(0)));
    assert_eq!(dual.node_of(Edge::new(NodeId(1), NodeId(0), 0)), Some(h(1)));
    assert_eq!(dual.node_of(Edge::new(NodeId(2), NodeId(0), 1)), Some(h(11)));
    assert_eq!(dual.node_of(Edge::new(NodeId(1), NodeId(3), 0)), None);
    for n in dual.nodes() {
        assert_eq!(dual.node_of(dual.token(n)), Some(n));
    }
}

#[test]
fn degree_one_node_is_rejected() {
    let emb = embed(&[vector![0.0, 0.0], vector![1.0, 0.0]], &[(0, 1)]);
    assert_eq!(
        expanded_dual(&emb, DualCfg::default()).unwrap_err(),
        PlanarError::PendantNode(NodeId(0))
    );

    // triangle with a tail on the outer face, only the bounded face triangulated
    let mut tail = embed(
        &[
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![2.0, 0.0],
        ],
        &[(0, 1), (1, 2), (2, 0), (1, 3)],
    );
    plane_triangulate(
        &mut tail,
        TriangulateCfg {
            scope: crate::embed::FaceScope::Bounded,
        },
    )
    .unwrap();
    assert_eq!(
        expanded_dual(&tail, DualCfg::default()).unwrap_err(),
        PlanarError::PendantNode(NodeId(3))
    );
}

#[test]
fn triangle_matchings_are_its_cuts() {
    let emb = triangle();
    let dual = expanded_dual(&emb, DualCfg::default()).unwrap();
    let matchings = all_perfect_matchings(&dual);
    assert_eq!(matchings.len(), 4);
    let mut cuts: Vec<Vec<EdgeId>> = matchings
        .iter()
        .map(|m| dual.cut_from_matching(m).unwrap())
        .collect();
    cuts.sort();
    let e = EdgeId;
    assert_eq!(
        cuts,
        vec![
            vec![],
            vec![e(0), e(1)],
            vec![e(0), e(2)],
            vec![e(1), e(2)],
        ]
    );
}

#[test]
fn matching_validation() {
    let dual = expanded_dual(&triangle(), DualCfg::default()).unwrap();
    assert_eq!(
        dual.is_perfect_matching(&[(h(0), h(1)), (h(2), h(3))]),
        Err(PlanarError::NotPerfect {
            nodes: 6,
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        dual.is_perfect_matching(&[(h(0), h(3)), (h(1), h(5)), (h(2), h(4))]),
        Err(PlanarError::NotADualEdge(h(0), h(3)))
    );
    assert_eq!(
        dual.cut_from_matching(&[(h(0), h(1)), (h(2), h(0)), (h(4), h(5))]),
        Err(PlanarError::MatchedTwice(h(0)))
    );
    assert_eq!(
        dual.cut_from_matching(&[(h(1), h(0)), (h(3), h(2)), (h(5), h(4))]),
        Ok(vec![])
    );
}
