//! Clockwise-odd (Pfaffian) edge orientation.
//!
//! Two passes over a connected plane embedding:
//! - `dfs`: spanning tree from node 0; tree edges and the edges met while unwinding
//!   the tree in reverse discovery order get a first direction.
//! - `parity`: non-tree edges are then settled face by face so that every bounded
//!   face ends up with an odd number of edges pointing clockwise.
//!
//! The result feeds the sign convention of the downstream Pfaffian solver.

mod dfs;
mod parity;
mod types;

pub use dfs::odd_edge_orientation;
pub use types::Orientation;
