//! Consistency and timing harness over random graphs.
//!
//! Purpose
//! - Run every registered algorithm on the same random graph, trial after trial,
//!   time each call, and count how often each one disagrees with the exact
//!   reference (`dfs` by default).
//!
//! Model
//! - Sequential trials. Trial `i` regenerates from `ReplayToken { seed, index: i }`,
//!   so a report is reproducible from its config.
//! - The reference runs first. A disagreement is counted only when neither side
//!   faulted. A panicking algorithm yields a `Fault` verdict for that call and the
//!   run continues.
//! - Optional cooperative pauses (`pause_every`) only yield the thread.

mod types;

use std::thread;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::graph::{draw_graph, GraphMatrix, RandomGraphCfg, ReplayToken};
use crate::search::{checked_search, HamiltonSearch, Registry, RegistryError};

pub use types::{HarnessCfg, Outcome, Report, Tally, TrialRecord, Verdict};

/// Run the built-in algorithms under `cfg`.
pub fn run_builtin(cfg: &HarnessCfg) -> Result<Report, RegistryError> {
    run(cfg, &Registry::builtin())
}

/// Run all algorithms of `registry`; fails if `cfg.reference` is not a registered
/// exact search.
pub fn run(cfg: &HarnessCfg, registry: &Registry) -> Result<Report, RegistryError> {
    let reference = registry.resolve(&cfg.reference)?;
    if !reference.is_exact() {
        return Err(RegistryError::NotExact {
            name: reference.name().to_string(),
        });
    }
    let others: Vec<&dyn HamiltonSearch> = registry
        .iter()
        .filter(|a| a.name() != reference.name())
        .collect();
    let mut tallies: Vec<Tally> = others
        .iter()
        .map(|a| Tally {
            algorithm: a.name().to_string(),
            exact: a.is_exact(),
            disagreements: 0,
            faults: 0,
        })
        .collect();
    let graph_cfg = RandomGraphCfg {
        vertex_count: cfg.vertices,
        edge_probability: cfg.edge_probability,
    };
    let (min, max) = cfg.vertices.bounds();
    info!(
        trials = cfg.trials,
        min,
        max,
        p = cfg.edge_probability,
        seed = cfg.seed,
        reference = reference.name(),
        "consistency run"
    );

    let mut lines = vec![
        format!(
            "Running {} tests on random graphs with node counts from {min} to {max}...",
            cfg.trials
        ),
        String::new(),
    ];
    let mut trials = Vec::with_capacity(cfg.trials);
    let mut reference_faults = 0usize;

    for index in 0..cfg.trials {
        let graph = draw_graph(
            graph_cfg,
            ReplayToken {
                seed: cfg.seed,
                index: index as u64,
            },
        );
        let n = graph.size();
        lines.push(format!("Test #{} (n={n}):", index + 1));

        let base = invoke(reference, &graph);
        if base.verdict.is_fault() {
            reference_faults += 1;
        }
        let expected = base.verdict.as_bool();
        lines.push(base.line());
        let mut outcomes = Vec::with_capacity(others.len() + 1);
        outcomes.push(base);

        for (algo, tally) in others.iter().zip(tallies.iter_mut()) {
            let outcome = invoke(*algo, &graph);
            match (expected, outcome.verdict.as_bool()) {
                (Some(a), Some(b)) if a != b => {
                    tally.disagreements += 1;
                    if tally.exact {
                        warn!(
                            algorithm = algo.name(),
                            trial = index + 1,
                            graph = %graph.to_csv(),
                            "exact algorithm disagrees with reference"
                        );
                    }
                }
                (_, None) => tally.faults += 1,
                _ => {}
            }
            lines.push(outcome.line());
            outcomes.push(outcome);
        }
        lines.push(String::new());
        debug!(trial = index + 1, n, "trial done");
        trials.push(TrialRecord {
            index,
            n,
            graph,
            outcomes,
        });

        if let Some(k) = cfg.pause_every.filter(|&k| k > 0) {
            if (index + 1) % k == 0 {
                thread::yield_now();
            }
        }
    }

    let mut report = Report {
        cfg: cfg.clone(),
        reference: reference.name().to_string(),
        trials,
        tallies,
        lines,
    };
    let summary = report.summary_lines();
    report.lines.extend(summary);
    for t in &report.tallies {
        info!(
            algorithm = %t.algorithm,
            exact = t.exact,
            disagreements = t.disagreements,
            faults = t.faults,
            trials = cfg.trials,
            "tally"
        );
    }
    if reference_faults > 0 {
        warn!(reference_faults, "reference faulted; affected trials were not compared");
    }
    Ok(report)
}

/// Time one call and isolate panics.
fn invoke(algo: &dyn HamiltonSearch, graph: &GraphMatrix) -> Outcome {
    let start = Instant::now();
    let result = checked_search(algo, graph);
    let elapsed = start.elapsed();
    if let Err(fault) = &result {
        warn!(algorithm = algo.name(), error = %fault, "search fault");
    }
    let outcome = Outcome {
        algorithm: algo.name().to_string(),
        verdict: result.into(),
        elapsed,
    };
    debug!("{}", outcome.line().trim_start());
    outcome
}

#[cfg(test)]
mod tests;
