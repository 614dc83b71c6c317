//! Random planar instances (jittered grids + replay tokens).
//!
//! Model
//! - `width × height` lattice points, each moved by at most `jitter` (fraction of the
//!   unit spacing) in x and y. Capping it at a quarter keeps every cell convex, so
//!   the straight-line drawing stays plane.
//! - All horizontal and vertical grid edges; each cell gets one diagonal (direction
//!   chosen uniformly) with probability `diagonal_prob`.
//! - Edge weights uniform in `weight_range`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::graph::{MultiGraph, NodeId};

#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    /// Points per row (at least 2).
    pub width: usize,
    /// Points per column (at least 2).
    pub height: usize,
    /// Chance of a diagonal per cell. Clamped to [0, 1].
    pub diagonal_prob: f64,
    /// Positional jitter as a fraction of the spacing. Clamped to [0, 0.25].
    pub jitter: f64,
    /// Half-open range of edge weights; an empty range gives constant weights.
    pub weight_range: (f64, f64),
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            diagonal_prob: 0.5,
            jitter: 0.2,
            weight_range: (-1.0, 1.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A weighted graph plus a plane straight-line drawing of it.
#[derive(Clone, Debug)]
pub struct PlanarInstance {
    pub graph: MultiGraph,
    pub positions: Vec<Vector2<f64>>,
}

/// Draw a jittered grid instance. Node `x + width * y` sits near `(x, y)`.
pub fn draw_grid_instance(cfg: GridCfg, tok: ReplayToken) -> Result<PlanarInstance> {
    let mut rng = tok.to_std_rng();
    let w = cfg.width.max(2);
    let h = cfg.height.max(2);
    let p = cfg.diagonal_prob.clamp(0.0, 1.0);
    let jit = cfg.jitter.clamp(0.0, 0.25);
    let (lo, hi) = cfg.weight_range;

    let positions: Vec<Vector2<f64>> = (0..w * h)
        .map(|v| {
            let (x, y) = ((v % w) as f64, (v / w) as f64);
            Vector2::new(
                x + (rng.gen::<f64>() * 2.0 - 1.0) * jit,
                y + (rng.gen::<f64>() * 2.0 - 1.0) * jit,
            )
        })
        .collect();

    let mut graph = MultiGraph::with_nodes(w * h);
    let node = |x: usize, y: usize| NodeId(x + w * y);
    let weight = |rng: &mut StdRng| -> f64 {
        if hi > lo {
            rng.gen_range(lo..hi)
        } else {
            lo
        }
    };
    for y in 0..h {
        for x in 0..w {
            if x + 1 < w {
                let wt = weight(&mut rng);
                graph.add_weighted_edge(node(x, y), node(x + 1, y), wt)?;
            }
            if y + 1 < h {
                let wt = weight(&mut rng);
                graph.add_weighted_edge(node(x, y), node(x, y + 1), wt)?;
            }
            if x + 1 < w && y + 1 < h && rng.gen_bool(p) {
                let wt = weight(&mut rng);
                if rng.gen_bool(0.5) {
                    graph.add_weighted_edge(node(x, y), node(x + 1, y + 1), wt)?;
                } else {
                    graph.add_weighted_edge(node(x + 1, y), node(x, y + 1), wt)?;
                }
            }
        }
    }
    tracing::trace!(
        seed = tok.seed,
        index = tok.index,
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "drew grid instance"
    );
    Ok(PlanarInstance { graph, positions })
}
