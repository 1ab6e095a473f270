//! Greedy heuristic: follow the lowest-indexed unvisited neighbor from vertex 0.
//!
//! Known weaknesses (kept on purpose, the harness measures them):
//! - No backtracking and no other start vertex, so it misses cycles an exact
//!   search finds.
//! - The last vertex is never checked against vertex 0. A `true` answer means
//!   "a Hamiltonian path from 0 was built greedily", which can be a false positive
//!   for the cycle question.

use crate::graph::GraphMatrix;

use super::{HamiltonSearch, MIN_CYCLE_LEN};

/// Registry entry for the greedy heuristic (`"greedy"`).
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySearch;

impl GreedySearch {
    pub const NAME: &'static str = "greedy";
}

impl HamiltonSearch for GreedySearch {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_exact(&self) -> bool {
        false
    }

    fn search(&self, graph: &GraphMatrix) -> bool {
        greedy_path(graph).is_some()
    }
}

/// Path built greedily from vertex 0, or `None` once the walk gets stuck.
///
/// `O(n²)`: one scan of a matrix row per placed vertex.
pub fn greedy_path(graph: &GraphMatrix) -> Option<Vec<usize>> {
    let n = graph.size();
    if n < MIN_CYCLE_LEN {
        return None;
    }
    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n);
    let mut cur = 0;
    visited[cur] = true;
    path.push(cur);
    while path.len() < n {
        cur = graph.neighbors(cur).find(|&v| !visited[v])?;
        visited[cur] = true;
        path.push(cur);
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_lowest_neighbor_first() {
        let g = GraphMatrix::from_edges(4, &[(0, 3), (0, 2), (2, 1), (1, 3)]).unwrap();
        assert_eq!(greedy_path(&g), Some(vec![0, 2, 1, 3]));
    }

    #[test]
    fn stuck_walk_fails_without_retry() {
        // Hamiltonian (0-2-1-3-0) but greed walks 0-1-2 and strands vertex 3.
        let g = GraphMatrix::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3)]).unwrap();
        assert_eq!(greedy_path(&g), None);
        assert!(!GreedySearch.search(&g));
    }
}
