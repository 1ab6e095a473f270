//! Harness configuration, per-trial records, and the final report.

use std::fmt;
use std::time::Duration;

use crate::graph::rand::DEFAULT_EDGE_PROBABILITY;
use crate::graph::{GraphMatrix, VertexCount};
use crate::search::registry::REFERENCE;
use crate::search::SearchFault;

/// Consistency run configuration.
#[derive(Clone, Debug)]
pub struct HarnessCfg {
    pub trials: usize,
    pub vertices: VertexCount,
    pub edge_probability: f64,
    /// Trial `i` draws its graph from `ReplayToken { seed, index: i }`.
    pub seed: u64,
    /// Yield the thread after every k-th trial. Has no effect on results.
    pub pause_every: Option<usize>,
    /// Registry name of the exact algorithm used as baseline.
    pub reference: String,
}

impl Default for HarnessCfg {
    fn default() -> Self {
        Self {
            trials: 100,
            vertices: VertexCount::Uniform { min: 5, max: 10 },
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            seed: 0,
            pause_every: Some(10),
            reference: REFERENCE.to_string(),
        }
    }
}

/// Result of one invocation: yes, no, or the algorithm failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Hamiltonian,
    NotHamiltonian,
    Fault(String),
}

impl Verdict {
    /// `None` for faults, which are excluded from comparison.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Verdict::Hamiltonian => Some(true),
            Verdict::NotHamiltonian => Some(false),
            Verdict::Fault(_) => None,
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Verdict::Fault(_))
    }

    /// Short tag used in tables.
    pub fn tag(&self) -> &'static str {
        match self {
            Verdict::Hamiltonian => "yes",
            Verdict::NotHamiltonian => "no",
            Verdict::Fault(_) => "fault",
        }
    }
}

impl From<Result<bool, SearchFault>> for Verdict {
    fn from(r: Result<bool, SearchFault>) -> Self {
        match r {
            Ok(true) => Verdict::Hamiltonian,
            Ok(false) => Verdict::NotHamiltonian,
            Err(fault) => Verdict::Fault(fault.message),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Hamiltonian => f.write_str("Hamiltonian"),
            Verdict::NotHamiltonian => f.write_str("not Hamiltonian"),
            Verdict::Fault(msg) => write!(f, "error - {msg}"),
        }
    }
}

/// One algorithm invocation within a trial.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub algorithm: String,
    pub verdict: Verdict,
    pub elapsed: Duration,
}

impl Outcome {
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }

    pub fn line(&self) -> String {
        match self.verdict {
            Verdict::Fault(_) => format!("  {}: {}", self.algorithm, self.verdict),
            _ => format!(
                "  {}: {} ({:.2} ms)",
                self.algorithm,
                self.verdict,
                self.elapsed_ms()
            ),
        }
    }
}

/// Everything observed in one trial. `outcomes[0]` is the reference.
#[derive(Clone, Debug)]
pub struct TrialRecord {
    pub index: usize,
    pub n: usize,
    pub graph: GraphMatrix,
    pub outcomes: Vec<Outcome>,
}

impl TrialRecord {
    pub fn reference(&self) -> Option<&Outcome> {
        self.outcomes.first()
    }

    pub fn outcome(&self, algorithm: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.algorithm == algorithm)
    }
}

/// Disagreement count of one non-reference algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally {
    pub algorithm: String,
    pub exact: bool,
    pub disagreements: usize,
    pub faults: usize,
}

/// Aggregate of a harness run.
#[derive(Clone, Debug)]
pub struct Report {
    pub cfg: HarnessCfg,
    pub reference: String,
    pub trials: Vec<TrialRecord>,
    pub tallies: Vec<Tally>,
    /// Human-readable log: header, per-trial blocks, summary.
    pub lines: Vec<String>,
}

impl Report {
    pub fn tally(&self, algorithm: &str) -> Option<&Tally> {
        self.tallies.iter().find(|t| t.algorithm == algorithm)
    }

    /// Tallies shown in the summary: heuristics only. Exact algorithms agree by construction.
    pub fn heuristic_tallies(&self) -> impl Iterator<Item = &Tally> + '_ {
        self.tallies.iter().filter(|t| !t.exact)
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let total = self.trials.len();
        let mut out = vec![format!(
            "Inconsistency summary (compared to {}):",
            self.reference
        )];
        out.extend(self.heuristic_tallies().map(|t| {
            format!(
                "- {}: {} inconsistent result(s) out of {}",
                t.algorithm, t.disagreements, total
            )
        }));
        out
    }

    /// Mean elapsed time of `algorithm` over its non-fault invocations.
    /// `None` when there are none (or more than `u32::MAX`).
    pub fn mean_elapsed(&self, algorithm: &str) -> Option<Duration> {
        let times: Vec<Duration> = self
            .trials
            .iter()
            .filter_map(|t| t.outcome(algorithm))
            .filter(|o| !o.verdict.is_fault())
            .map(|o| o.elapsed)
            .collect();
        if times.is_empty() {
            return None;
        }
        let sum: Duration = times.iter().sum();
        let count = u32::try_from(times.len()).ok()?;
        Some(sum / count)
    }
}
