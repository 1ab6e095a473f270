//! Exact search by enumerating every vertex permutation.
//!
//! No pruning: all `n!` orders are generated (Heap's algorithm, iterative) until one
//! closes into a cycle. Only useful as a slow cross-check of `backtrack` on small graphs.

use crate::graph::GraphMatrix;

use super::{HamiltonSearch, MIN_CYCLE_LEN};

/// Registry entry for the permutation scan (`"exponential"`).
#[derive(Clone, Copy, Debug, Default)]
pub struct PermutationSearch;

impl PermutationSearch {
    pub const NAME: &'static str = "exponential";
}

impl HamiltonSearch for PermutationSearch {
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

/// First permutation (in Heap order) that forms a Hamiltonian cycle.
pub fn find_cycle(graph: &GraphMatrix) -> Option<Vec<usize>> {
    let n = graph.size();
    if n < MIN_CYCLE_LEN {
        return None;
    }
    let mut perms = HeapPermutations::new(n);
    while let Some(perm) = perms.next_permutation() {
        if closes_cycle(graph, perm) {
            return Some(perm.to_vec());
        }
    }
    None
}

fn closes_cycle(graph: &GraphMatrix, perm: &[usize]) -> bool {
    if !perm.windows(2).all(|w| graph.has_edge(w[0], w[1])) {
        return false;
    }
    match (perm.first(), perm.last()) {
        (Some(&first), Some(&last)) => graph.has_edge(last, first),
        _ => false,
    }
}

/// Iterative Heap's algorithm over `0..n`.
///
/// Yields each of the `n!` orders exactly once, borrowing the internal buffer.
/// Finite and forward-only: to start over, build a new generator.
#[derive(Clone, Debug)]
pub struct HeapPermutations {
    items: Vec<usize>,
    counters: Vec<usize>,
    i: usize,
    started: bool,
}

impl HeapPermutations {
    pub fn new(n: usize) -> Self {
        Self {
            items: (0..n).collect(),
            counters: vec![0; n],
            i: 1,
            started: false,
        }
    }

    pub fn next_permutation(&mut self) -> Option<&[usize]> {
        if !self.started {
            self.started = true;
            return Some(&self.items);
        }
        while self.i < self.items.len() {
            let i = self.i;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.i = 1;
                return Some(&self.items);
            }
            self.counters[i] = 0;
            self.i += 1;
        }
        None
    }
}
