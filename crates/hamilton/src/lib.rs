//! Hamiltonian cycle deciders and a cross-checking harness.
//!
//! Layout
//! - `graph`: `GraphMatrix` (validated square 0/1 adjacency matrix) and random generators.
//! - `search`: the `HamiltonSearch` contract, three built-in algorithms, and the
//!   name registry (`dfs`, `exponential`, `greedy`).
//! - `harness`: randomized consistency/timing runs against the exact reference.
//!
//! Conventions
//! - Graphs with fewer than three vertices have no Hamiltonian cycle, for every algorithm.
//! - The greedy heuristic is not authoritative; see `search::greedy`.

pub mod api;
pub mod graph;
pub mod harness;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use graph::{GraphMatrix, MatrixError};
pub use search::{checked_search, HamiltonSearch, SearchFault};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graph::{
        draw_graph, random_graph, GraphMatrix, MatrixError, RandomGraphCfg, ReplayToken,
        VertexCount,
    };
    pub use crate::harness::{HarnessCfg, Report, Verdict};
    pub use crate::search::{
        checked_search, BacktrackSearch, GreedySearch, HamiltonSearch, PermutationSearch,
        Registry, RegistryError,
    };
}
