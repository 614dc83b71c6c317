//! Identifier types and the directed-edge token.
//!
//! Every undirected edge lives once in the edge arena and is addressed by `EdgeId`.
//! Its two directions are half-edges `2e` (`ends[0] → ends[1]`) and `2e + 1`
//! (`ends[1] → ends[0]`), so the reverse of a half-edge is one XOR away.

use std::fmt;

macro_rules! idx {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

idx!(NodeId);
idx!(EdgeId);
idx!(HalfEdgeId);

impl EdgeId {
    /// Half-edge running `ends[0] → ends[1]`.
    #[inline]
    pub fn forward(self) -> HalfEdgeId {
        HalfEdgeId(2 * self.0)
    }
    /// Half-edge running `ends[1] → ends[0]`.
    #[inline]
    pub fn backward(self) -> HalfEdgeId {
        HalfEdgeId(2 * self.0 + 1)
    }
}

impl HalfEdgeId {
    #[inline]
    pub fn twin(self) -> HalfEdgeId {
        HalfEdgeId(self.0 ^ 1)
    }
    #[inline]
    pub fn edge(self) -> EdgeId {
        EdgeId(self.0 >> 1)
    }
    /// 0 for the forward direction, 1 for the backward one.
    #[inline]
    pub fn dir(self) -> usize {
        self.0 & 1
    }
}

/// Directed reference `(from, to, key)` to an undirected multigraph edge.
///
/// `key` tells parallel edges between the same endpoints apart; the reverse token
/// `(to, from, key)` names the same undirected edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub key: u32,
}

impl Edge {
    #[inline]
    pub fn new(from: NodeId, to: NodeId, key: u32) -> Self {
        Self { from, to, key }
    }
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            key: self.key,
        }
    }
    /// Canonical undirected form `(min, max, key)`.
    #[inline]
    pub fn canonical(self) -> (NodeId, NodeId, u32) {
        if self.from <= self.to {
            (self.from, self.to, self.key)
        } else {
            (self.to, self.from, self.key)
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.from, self.to, self.key)
    }
}

/// Stored undirected edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRecord {
    pub ends: [NodeId; 2],
    pub key: u32,
    /// Interaction weight; `None` means "unset" and falls back to the dual's default.
    pub weight: Option<f64>,
}
