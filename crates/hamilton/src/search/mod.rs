//! Hamiltonian cycle searches behind one contract.
//!
//! Purpose
//! - `HamiltonSearch` is the interface every algorithm (built-in or caller-supplied)
//!   implements: `search(&GraphMatrix) -> bool`.
//! - Three built-ins with different completeness/cost trade-offs:
//!   `backtrack` (exact, pruned DFS), `permutation` (exact, full enumeration),
//!   `greedy` (polynomial, incomplete).
//! - `registry` maps the symbolic names `dfs`, `exponential`, `greedy` to them.
//!
//! Conventions
//! - Graphs with fewer than `MIN_CYCLE_LEN` vertices have no Hamiltonian cycle.
//!   All three built-ins apply this identically, so they agree on tiny inputs.
//! - Searches are total over valid matrices. `checked_search` converts a panic
//!   inside an implementation into a `SearchFault` for callers that must not unwind.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::graph::GraphMatrix;

pub mod backtrack;
pub mod greedy;
pub mod permutation;
pub mod registry;

pub use backtrack::BacktrackSearch;
pub use greedy::{greedy_path, GreedySearch};
pub use permutation::{HeapPermutations, PermutationSearch};
pub use registry::{Registry, RegistryError};

/// A simple cycle needs at least three distinct vertices.
pub const MIN_CYCLE_LEN: usize = 3;

/// Common contract for Hamiltonian cycle deciders.
pub trait HamiltonSearch {
    /// Registry key, e.g. `"dfs"`.
    fn name(&self) -> &str;

    /// Whether a `true`/`false` answer is authoritative.
    fn is_exact(&self) -> bool;

    fn search(&self, graph: &GraphMatrix) -> bool;
}

/// A search implementation panicked instead of answering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchFault {
    pub algorithm: String,
    pub message: String,
}

impl fmt::Display for SearchFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "algorithm {} failed: {}", self.algorithm, self.message)
    }
}

impl std::error::Error for SearchFault {}

/// Run `algo` and turn a panic into `SearchFault`.
pub fn checked_search(
    algo: &dyn HamiltonSearch,
    graph: &GraphMatrix,
) -> Result<bool, SearchFault> {
    panic::catch_unwind(AssertUnwindSafe(|| algo.search(graph))).map_err(|payload| {
        SearchFault {
            algorithm: algo.name().to_string(),
            message: panic_message(&*payload),
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

/// True if `path` visits every vertex of `graph` once along existing edges.
/// Closure back to `path[0]` is not required.
pub fn is_hamiltonian_path(graph: &GraphMatrix, path: &[usize]) -> bool {
    let n = graph.size();
    if path.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in path {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    path.windows(2).all(|w| graph.has_edge(w[0], w[1]))
}

/// True if `cycle` is a Hamiltonian path whose last vertex connects back to the first.
pub fn is_hamiltonian_cycle(graph: &GraphMatrix, cycle: &[usize]) -> bool {
    if cycle.len() < MIN_CYCLE_LEN || !is_hamiltonian_path(graph, cycle) {
        return false;
    }
    match (cycle.first(), cycle.last()) {
        (Some(&first), Some(&last)) => graph.has_edge(last, first),
        _ => false,
    }
}
