//! Name → algorithm lookup.
//!
//! - `resolve`/`builtin`/`names`: static table of the built-ins, for one-shot dispatch.
//! - `Registry`: owned, ordered collection the harness iterates; accepts extra
//!   `HamiltonSearch` implementations via `register`.

use std::fmt;

use super::{BacktrackSearch, GreedySearch, HamiltonSearch, PermutationSearch};

/// Name of the exact search every other algorithm is compared against.
pub const REFERENCE: &str = BacktrackSearch::NAME;

static BUILTIN: [&(dyn HamiltonSearch + Sync); 3] =
    [&BacktrackSearch, &PermutationSearch, &GreedySearch];

/// Lookup failures. Returned as values so callers can render a specific message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    UnknownAlgorithm { name: String },
    Duplicate { name: String },
    /// A heuristic was named where an exact search is required.
    NotExact { name: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownAlgorithm { name } => {
                write!(f, "unknown algorithm {name:?}")
            }
            RegistryError::Duplicate { name } => {
                write!(f, "algorithm {name:?} is already registered")
            }
            RegistryError::NotExact { name } => {
                write!(f, "algorithm {name:?} is a heuristic and cannot be the reference")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Look up a built-in algorithm by name.
pub fn resolve(name: &str) -> Result<&'static dyn HamiltonSearch, RegistryError> {
    builtin()
        .find(|a| a.name() == name)
        .ok_or_else(|| RegistryError::UnknownAlgorithm {
            name: name.to_string(),
        })
}

/// Built-in algorithms in registration order.
pub fn builtin() -> impl Iterator<Item = &'static dyn HamiltonSearch> {
    BUILTIN.iter().map(|&a| a as &'static dyn HamiltonSearch)
}

/// Built-in names in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    [BacktrackSearch::NAME, PermutationSearch::NAME, GreedySearch::NAME].into_iter()
}

/// Ordered set of algorithms with unique names.
pub struct Registry {
    algorithms: Vec<Box<dyn HamiltonSearch>>,
}

impl Registry {
    /// Empty registry; see `builtin` for the usual starting point.
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// `dfs`, `exponential`, `greedy`, in that order.
    pub fn builtin() -> Self {
        Self {
            algorithms: vec![
                Box::new(BacktrackSearch),
                Box::new(PermutationSearch),
                Box::new(GreedySearch),
            ],
        }
    }

    /// Append an algorithm. Names must be unique.
    pub fn register(&mut self, algo: Box<dyn HamiltonSearch>) -> Result<(), RegistryError> {
        if self.algorithms.iter().any(|a| a.name() == algo.name()) {
            return Err(RegistryError::Duplicate {
                name: algo.name().to_string(),
            });
        }
        self.algorithms.push(algo);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<&dyn HamiltonSearch, RegistryError> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| &**a)
            .ok_or_else(|| RegistryError::UnknownAlgorithm {
                name: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn HamiltonSearch> + '_ {
        self.algorithms.iter().map(|a| &**a)
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|a| a.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|a| a.name())).finish()
    }
}
