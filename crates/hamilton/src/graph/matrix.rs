//! Square boolean adjacency matrix and its textual form.
//!
//! - `GraphMatrix`: validated `n × n` matrix over `bool`, backed by `DMatrix<bool>`.
//! - `MatrixError`: malformed text or out-of-range vertex indices.
//!
//! Text format: one row per line, cells separated by commas, each cell `0` or `1`.
//! Whitespace around the whole text and around each cell is ignored. Blank input
//! is the empty graph (zero vertices).

use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;

/// Errors raised while building a `GraphMatrix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// Row `row` has `len` cells but the matrix has `expected` rows.
    NotSquare { row: usize, len: usize, expected: usize },
    /// Cell `(row, col)` is neither `0` nor `1`.
    BadCell { row: usize, col: usize, token: String },
    /// An edge endpoint is not a vertex of the graph.
    VertexOutOfRange { vertex: usize, size: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::NotSquare { row, len, expected } => write!(
                f,
                "matrix is not square: row {row} has {len} cells, expected {expected}"
            ),
            MatrixError::BadCell { row, col, token } => {
                write!(f, "cell ({row}, {col}) is {token:?}, expected 0 or 1")
            }
            MatrixError::VertexOutOfRange { vertex, size } => {
                write!(f, "vertex {vertex} out of range for a graph of size {size}")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// Adjacency matrix of a graph on vertices `0..size`.
///
/// Invariants:
/// - Square by construction; every cell is a `bool`.
/// - Symmetry is expected for undirected graphs but not enforced; see `is_symmetric`.
/// - Self-loops are representable and ignored by the cycle searches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphMatrix {
    cells: DMatrix<bool>,
}

impl GraphMatrix {
    /// Graph on `n` vertices without edges.
    pub fn empty(n: usize) -> Self {
        Self {
            cells: DMatrix::from_element(n, n, false),
        }
    }

    /// Complete graph on `n` vertices (no self-loops).
    pub fn complete(n: usize) -> Self {
        Self::from_fn(n, |i, j| i != j)
    }

    /// Build from a cell predicate evaluated at every `(i, j)`.
    pub fn from_fn(n: usize, f: impl FnMut(usize, usize) -> bool) -> Self {
        Self {
            cells: DMatrix::from_fn(n, n, f),
        }
    }

    /// Undirected graph on `n` vertices with the given edge list.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, MatrixError> {
        let mut g = Self::empty(n);
        for &(a, b) in edges {
            for v in [a, b] {
                if v >= n {
                    return Err(MatrixError::VertexOutOfRange { vertex: v, size: n });
                }
            }
            g.connect(a, b);
        }
        Ok(g)
    }

    /// Build from rows of `0`/`1` values.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, MatrixError> {
        let n = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: n,
                });
            }
            if let Some((col, v)) = cells.iter().enumerate().find(|(_, v)| **v > 1) {
                return Err(MatrixError::BadCell {
                    row,
                    col,
                    token: v.to_string(),
                });
            }
        }
        Ok(Self::from_fn(n, |i, j| rows[i][j] == 1))
    }

    /// Parse the comma/newline text format.
    pub fn parse(text: &str) -> Result<Self, MatrixError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::empty(0));
        }
        let rows = text
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.split(',')
                    .enumerate()
                    .map(|(col, token)| parse_cell(row, col, token))
                    .collect::<Result<Vec<bool>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let n = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, c)| c.len() != n) {
            return Err(MatrixError::NotSquare {
                row,
                len: cells.len(),
                expected: n,
            });
        }
        Ok(Self::from_fn(n, |i, j| rows[i][j]))
    }

    /// Render in the text format accepted by `parse`.
    pub fn to_csv(&self) -> String {
        self.cells
            .row_iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c { "1" } else { "0" })
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Edge indicator for `(i, j)`. Panics if either index is out of range.
    #[inline]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.cells[(i, j)]
    }

    /// Vertices adjacent to `v`, in ascending order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size()).filter(move |&u| self.cells[(v, u)])
    }

    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).filter(|&u| u != v).count()
    }

    pub fn is_symmetric(&self) -> bool {
        self.cells == self.cells.transpose()
    }

    /// Number of undirected edges, counting the upper triangle only.
    pub fn edge_count(&self) -> usize {
        let n = self.size();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.cells[(i, j)])
            .count()
    }

    /// Set both `(a, b)` and `(b, a)`.
    pub(crate) fn connect(&mut self, a: usize, b: usize) {
        self.cells[(a, b)] = true;
        self.cells[(b, a)] = true;
    }
}

fn parse_cell(row: usize, col: usize, token: &str) -> Result<bool, MatrixError> {
    match token.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(MatrixError::BadCell {
            row,
            col,
            token: other.to_string(),
        }),
    }
}

impl FromStr for GraphMatrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GraphMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv())
    }
}
