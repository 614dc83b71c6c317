use super::*;
use crate::error::PlanarError;

/// Unit square 0-1-2-3 with the only possible rotation (every vertex has degree 2).
fn square() -> Embedding {
    let mut g = MultiGraph::with_nodes(4);
    for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        g.add_edge(NodeId(u), NodeId(v)).unwrap();
    }
    let orders: Vec<Vec<HalfEdgeId>> = g.nodes().map(|v| g.incident(v).to_vec()).collect();
    Embedding::from_cyclic_orders(g, &orders).unwrap()
}

#[test]
fn parallel_edges_get_increasing_keys() {
    let mut g = MultiGraph::with_nodes(3);
    let a = g.add_edge(NodeId(0), NodeId(1)).unwrap();
    let b = g.add_edge(NodeId(1), NodeId(0)).unwrap();
    let c = g.add_edge(NodeId(1), NodeId(2)).unwrap();
    assert_eq!(g.record(a).key, 0);
    assert_eq!(g.record(b).key, 1);
    assert_eq!(g.record(c).key, 0);
    assert_eq!(g.parallel_edges(NodeId(0), NodeId(1)), &[a, b]);

    // both directions of a token resolve to twin half-edges
    let fwd = g.half_edge(Edge::new(NodeId(1), NodeId(0), 1)).unwrap();
    let bwd = g.half_edge(Edge::new(NodeId(0), NodeId(1), 1)).unwrap();
    assert_eq!(fwd, b.forward());
    assert_eq!(bwd.twin(), fwd);
    assert!(g.half_edge(Edge::new(NodeId(0), NodeId(1), 2)).is_none());
}

#[test]
fn self_loops_and_unknown_nodes_are_rejected() {
    let mut g = MultiGraph::with_nodes(2);
    assert_eq!(
        g.add_edge(NodeId(1), NodeId(1)),
        Err(PlanarError::SelfLoop(NodeId(1)))
    );
    assert!(matches!(
        g.add_edge(NodeId(0), NodeId(5)),
        Err(PlanarError::NodeOutOfRange { .. })
    ));
    assert_eq!(g.num_edges(), 0);
}

#[test]
fn tokens_and_canonical_form() {
    let mut g = MultiGraph::with_nodes(3);
    let e = g.add_weighted_edge(NodeId(2), NodeId(0), 1.5).unwrap();
    let t = g.token(e.forward());
    assert_eq!(t, Edge::new(NodeId(2), NodeId(0), 0));
    assert_eq!(g.token(e.backward()), t.reversed());
    assert_eq!(t.canonical(), (NodeId(0), NodeId(2), 0));
    assert_eq!(g.record(e).weight, Some(1.5));
    assert_eq!(g.origin(e.backward()), NodeId(0));
    assert_eq!(g.dest(e.backward()), NodeId(2));
}

#[test]
fn square_faces_and_rotation() {
    let emb = square();
    emb.validate().unwrap();
    for v in emb.graph().nodes() {
        assert_eq!(emb.rotation_at(v).len(), 2);
    }
    let faces = emb.faces();
    assert_eq!(faces.len(), 2);
    for f in faces.ids() {
        assert_eq!(faces.boundary_len(f), 4);
        assert_eq!(faces.boundary(&emb, f).count(), 4);
    }
    // twins always lie on different faces of a cycle
    let h = EdgeId(0).forward();
    assert_ne!(faces.face_of(h), faces.face_of(h.twin()));
    // face_prev inverts face_next
    for h in (0..emb.graph().num_half_edges()).map(HalfEdgeId) {
        assert_eq!(emb.face_prev(emb.face_next(h)), h);
    }
}

#[test]
fn foreign_half_edge_in_order_is_rejected() {
    let mut g = MultiGraph::with_nodes(3);
    g.add_edge(NodeId(0), NodeId(1)).unwrap();
    g.add_edge(NodeId(1), NodeId(2)).unwrap();
    // node 0 claims a half-edge that leaves node 1
    let orders = vec![
        vec![HalfEdgeId(1)],
        vec![HalfEdgeId(0), HalfEdgeId(2)],
        vec![HalfEdgeId(3)],
    ];
    assert!(matches!(
        Embedding::from_cyclic_orders(g, &orders),
        Err(PlanarError::InvalidRotation { node: NodeId(0), .. })
    ));
}

#[test]
fn order_with_wrong_length_is_rejected() {
    let mut g = MultiGraph::with_nodes(2);
    g.add_edge(NodeId(0), NodeId(1)).unwrap();
    let orders = vec![vec![], vec![HalfEdgeId(1)]];
    assert!(matches!(
        Embedding::from_cyclic_orders(g, &orders),
        Err(PlanarError::InvalidRotation { node: NodeId(0), .. })
    ));
}

#[test]
fn chord_splits_square_into_two_triangles() {
    let mut emb = square();
    let ij = EdgeId(0).forward(); // 0 -> 1
    let jk = emb.face_next(ij); // 1 -> 2
    let e = emb.insert_chord(ij, jk).unwrap();
    emb.validate().unwrap();
    assert_eq!(emb.graph().token(e.forward()), Edge::new(NodeId(0), NodeId(2), 0));

    let tri: Vec<_> = emb.face_walk(ij).collect();
    assert_eq!(tri, vec![ij, jk, e.backward()]);
    let rest: Vec<_> = emb.face_walk(e.forward()).collect();
    assert_eq!(rest.len(), 3);
    let lens: Vec<_> = {
        let faces = emb.faces();
        faces.ids().map(|f| faces.boundary_len(f)).collect()
    };
    assert_eq!(lens.iter().filter(|&&l| l == 3).count(), 2);
    assert_eq!(lens.iter().sum::<usize>(), 2 * emb.graph().num_edges());
}

#[test]
fn chord_refuses_self_loop() {
    let mut g = MultiGraph::with_nodes(2);
    g.add_edge(NodeId(0), NodeId(1)).unwrap();
    let orders: Vec<Vec<HalfEdgeId>> = g.nodes().map(|v| g.incident(v).to_vec()).collect();
    let mut emb = Embedding::from_cyclic_orders(g, &orders).unwrap();
    let ij = EdgeId(0).forward();
    let jk = emb.face_next(ij); // walks straight back to 0
    assert!(matches!(
        emb.insert_chord(ij, jk),
        Err(PlanarError::Invariant(_))
    ));
    assert_eq!(emb.graph().num_edges(), 1);
}

#[test]
fn connectivity_checks() {
    let emb = square();
    assert!(is_connected(emb.graph()));
    assert!(is_biconnected(emb.graph()));

    let mut path = MultiGraph::with_nodes(3);
    path.add_edge(NodeId(0), NodeId(1)).unwrap();
    path.add_edge(NodeId(1), NodeId(2)).unwrap();
    assert!(is_connected(&path));
    assert!(!is_biconnected(&path));

    // a doubled edge is not enough to make a path biconnected
    path.add_edge(NodeId(1), NodeId(2)).unwrap();
    assert!(!is_biconnected(&path));

    let mut split = MultiGraph::with_nodes(3);
    split.add_edge(NodeId(0), NodeId(1)).unwrap();
    assert_eq!(first_unreached(&split), Some(NodeId(2)));
    assert!(!is_biconnected(&split));
}
