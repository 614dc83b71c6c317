//! Error type shared by every stage of the pipeline.
//!
//! Two families:
//! - precondition failures (bad input: too few nodes, loops, disconnected graph,
//!   malformed rotation, a degree-one node left for the dual), reported before any
//!   mutation where possible;
//! - invariant failures, raised mid-stage when the embedding turns out to be
//!   inconsistent (non-planar rotation slipped through, broken face walk).
//!
//! Neither family is transient. After an error from the triangulator the embedding
//! is partially triangulated and must be discarded.

use thiserror::Error;

use crate::graph::{EdgeId, HalfEdgeId, NodeId};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum PlanarError {
    #[error("operation needs at least {needed} nodes, graph has {found}")]
    TooFewNodes { needed: usize, found: usize },

    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: NodeId, num_nodes: usize },

    #[error("self-loop at node {0} is not supported")]
    SelfLoop(NodeId),

    #[error("node {0} has a missing or non-finite position")]
    InvalidPosition(NodeId),

    #[error("rotation at node {node} is invalid: {reason}")]
    InvalidRotation { node: NodeId, reason: String },

    #[error("no outer face is marked on this embedding")]
    MissingOuterFace,

    #[error("graph is disconnected: node {unreached} is not reachable from node 0")]
    Disconnected { unreached: NodeId },

    #[error("node {0} has degree one; the expanded dual needs at least two edges at every node")]
    PendantNode(NodeId),

    #[error("matching has {found} edges, a perfect matching of {nodes} dual nodes needs {expected}")]
    NotPerfect {
        nodes: usize,
        expected: usize,
        found: usize,
    },

    #[error("dual node {0} is matched more than once")]
    MatchedTwice(HalfEdgeId),

    #[error("half-edges {0} and {1} are not joined by a dual edge")]
    NotADualEdge(HalfEdgeId, HalfEdgeId),

    #[error("edge {0} does not exist")]
    UnknownEdge(EdgeId),

    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, PlanarError>;
