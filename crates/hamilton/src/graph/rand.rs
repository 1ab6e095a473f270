//! Random undirected graphs (independent edges + replay tokens).
//!
//! Model
//! - Draw `n` from a `VertexCount`, then include every pair `i < j` independently
//!   with probability `p`. The matrix is symmetric with an empty diagonal.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so a
//!   harness trial can be regenerated from its index alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::GraphMatrix;

/// Edge inclusion probability used when nothing else is configured.
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.4;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive on both ends. `max < min` collapses to `min`.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }

    /// Smallest and largest count this distribution can produce.
    pub fn bounds(&self) -> (usize, usize) {
        match *self {
            VertexCount::Fixed(n) => (n, n),
            VertexCount::Uniform { min, max } => (min, max.max(min)),
        }
    }
}

/// Random graph sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphCfg {
    pub vertex_count: VertexCount,
    /// Per-pair inclusion probability. Values outside `[0, 1]` act as clamped; NaN means no edges.
    pub edge_probability: f64,
}

impl Default for RandomGraphCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 5, max: 10 },
            edge_probability: DEFAULT_EDGE_PROBABILITY,
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
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
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

/// Symmetric random matrix on `n` vertices with zero diagonal.
pub fn random_graph<R: Rng>(n: usize, edge_probability: f64, rng: &mut R) -> GraphMatrix {
    let mut g = GraphMatrix::empty(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen::<f64>() < edge_probability {
                g.connect(i, j);
            }
        }
    }
    g
}

/// Draw one graph for `tok`; the same `(cfg, tok)` always yields the same matrix.
pub fn draw_graph(cfg: RandomGraphCfg, tok: ReplayToken) -> GraphMatrix {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    random_graph(n, cfg.edge_probability, &mut rng)
}
