//! Curated surface for the CLI and benches (UNSTABLE).
//!
//! Prefer these re-exports over reaching into submodules; names may move between
//! modules without notice.

// Input model
pub use crate::graph::{
    draw_graph, random_graph, GraphMatrix, MatrixError, RandomGraphCfg, ReplayToken, VertexCount,
};
// Algorithms
pub use crate::search::backtrack::find_cycle as backtrack_cycle;
pub use crate::search::permutation::find_cycle as permutation_cycle;
pub use crate::search::registry::{
    builtin as builtin_algorithms, names as builtin_names, resolve, REFERENCE,
};
pub use crate::search::{
    checked_search, greedy_path, is_hamiltonian_cycle, is_hamiltonian_path, BacktrackSearch,
    GreedySearch, HamiltonSearch, PermutationSearch, Registry, RegistryError, SearchFault,
};
// Harness
pub use crate::harness::{
    run as run_harness, run_builtin, HarnessCfg, Outcome, Report, Tally, TrialRecord, Verdict,
};
