//! Exact search: depth-first extension with chronological backtracking.

use crate::graph::GraphMatrix;

use super::{HamiltonSearch, MIN_CYCLE_LEN};

/// Registry entry for the backtracking search (`"dfs"`).
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackSearch;

impl BacktrackSearch {
    pub const NAME: &'static str = "dfs";
}

impl HamiltonSearch for BacktrackSearch {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn search(&self, graph: &GraphMatrix) -> bool {
        find_cycle(graph).is_some()
    }
}

/// Find a Hamiltonian cycle, returned as the vertex order starting at its start vertex.
///
/// Tries start vertices in ascending order and neighbors in ascending order; the
/// first closed tour wins.
pub fn find_cycle(graph: &GraphMatrix) -> Option<Vec<usize>> {
    let n = graph.size();
    if n < MIN_CYCLE_LEN {
        return None;
    }
    let mut runner = BacktrackRunner::new(graph);
    (0..n).find_map(|start| runner.solve_from(start))
}

/// Search state reused across start vertices.
struct BacktrackRunner<'a> {
    g: &'a GraphMatrix,
    visited: Vec<bool>,
    path: Vec<usize>,
}

impl<'a> BacktrackRunner<'a> {
    fn new(g: &'a GraphMatrix) -> Self {
        let n = g.size();
        Self {
            g,
            visited: vec![false; n],
            path: Vec::with_capacity(n),
        }
    }

    fn solve_from(&mut self, start: usize) -> Option<Vec<usize>> {
        self.visited.fill(false);
        self.path.clear();
        self.visited[start] = true;
        self.path.push(start);
        if self.recur(start) {
            Some(self.path.clone())
        } else {
            None
        }
    }

    fn recur(&mut self, cur: usize) -> bool {
        let n = self.g.size();
        if self.path.len() == n {
            return self.g.has_edge(cur, self.path[0]);
        }
        for next in 0..n {
            if self.visited[next] || !self.g.has_edge(cur, next) {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);
            if self.recur(next) {
                return true;
            }
            self.path.pop();
            self.visited[next] = false;
        }
        false
    }
}
