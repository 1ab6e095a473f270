//! Graph input model: adjacency matrices and random generators.
//!
//! Purpose
//! - `GraphMatrix` is the single input type of every search. It is validated on
//!   construction and never mutated once handed to an algorithm.
//! - `rand` produces reproducible random graphs for the consistency harness.

mod matrix;
pub mod rand;

pub use matrix::{GraphMatrix, MatrixError};
pub use self::rand::{draw_graph, random_graph, RandomGraphCfg, ReplayToken, VertexCount};

#[cfg(test)]
mod tests;
