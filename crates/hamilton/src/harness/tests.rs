use super::*;
use crate::graph::VertexCount;
use crate::search::{backtrack, GreedySearch};

fn small_cfg(trials: usize) -> HarnessCfg {
    HarnessCfg {
        trials,
        vertices: VertexCount::Uniform { min: 4, max: 7 },
        seed: 11,
        ..HarnessCfg::default()
    }
}

/// Answers `true` on every graph.
struct Optimist;

impl HamiltonSearch for Optimist {
    fn name(&self) -> &str {
        "optimist"
    }
    fn is_exact(&self) -> bool {
        false
    }
    fn search(&self, _graph: &GraphMatrix) -> bool {
        true
    }
}

/// Panics on graphs with an even vertex count.
struct Flaky;

impl HamiltonSearch for Flaky {
    fn name(&self) -> &str {
        "flaky"
    }
    fn is_exact(&self) -> bool {
        false
    }
    fn search(&self, graph: &GraphMatrix) -> bool {
        if graph.size() % 2 == 0 {
            panic!("even size not supported");
        }
        backtrack::find_cycle(graph).is_some()
    }
}

#[test]
fn one_record_per_trial_and_counts_bounded() {
    for trials in [0, 1, 25] {
        let report = run_builtin(&small_cfg(trials)).unwrap();
        assert_eq!(report.trials.len(), trials);
        for (i, t) in report.trials.iter().enumerate() {
            assert_eq!(t.index, i);
            assert_eq!(t.n, t.graph.size());
            assert!((4..=7).contains(&t.n));
            assert_eq!(t.reference().unwrap().algorithm, "dfs");
            assert_eq!(t.outcomes.len(), 3);
        }
        for tally in &report.tallies {
            assert!(tally.disagreements <= trials);
            assert!(tally.faults <= trials);
        }
    }
}

#[test]
fn exact_algorithms_never_disagree() {
    let report = run_builtin(&small_cfg(40)).unwrap();
    let exp = report.tally("exponential").unwrap();
    assert!(exp.exact);
    assert_eq!(exp.disagreements, 0);
    assert!(report.tally("dfs").is_none());
}

#[test]
fn greedy_tally_matches_recount() {
    let report = run_builtin(&small_cfg(60)).unwrap();
    let recount = report
        .trials
        .iter()
        .filter(|t| {
            let dfs = t.outcome("dfs").unwrap().verdict.as_bool();
            let greedy = t.outcome("greedy").unwrap().verdict.as_bool();
            dfs != greedy
        })
        .count();
    assert_eq!(report.tally("greedy").unwrap().disagreements, recount);
    for t in &report.trials {
        assert_eq!(
            t.outcome("greedy").unwrap().verdict.as_bool(),
            Some(GreedySearch.search(&t.graph))
        );
    }
}

#[test]
fn summary_lists_heuristics_only() {
    let report = run_builtin(&small_cfg(5)).unwrap();
    let summary = report.summary_lines();
    assert_eq!(summary[0], "Inconsistency summary (compared to dfs):");
    assert_eq!(summary.len(), 2);
    assert!(summary[1].starts_with("- greedy: "));
    assert!(summary[1].ends_with("out of 5"));
    assert_eq!(report.lines.last(), summary.last());
    assert!(report.lines[0].starts_with("Running 5 tests"));
    assert!(report.lines.iter().any(|l| l.starts_with("Test #5 (n=")));
}

#[test]
fn same_seed_same_graphs_and_verdicts() {
    let a = run_builtin(&small_cfg(20)).unwrap();
    let paused = HarnessCfg {
        pause_every: Some(1),
        ..small_cfg(20)
    };
    let b = run_builtin(&paused).unwrap();
    let unpaused = HarnessCfg {
        pause_every: None,
        ..small_cfg(20)
    };
    let c = run_builtin(&unpaused).unwrap();
    for ((x, y), z) in a.trials.iter().zip(&b.trials).zip(&c.trials) {
        assert_eq!(x.graph, y.graph);
        assert_eq!(x.graph, z.graph);
        let verdicts = |t: &TrialRecord| {
            t.outcomes
                .iter()
                .map(|o| o.verdict.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(verdicts(x), verdicts(y));
        assert_eq!(verdicts(x), verdicts(z));
    }
    assert_eq!(a.tallies, b.tallies);
}

#[test]
fn custom_algorithm_is_compared() {
    let mut registry = Registry::builtin();
    registry.register(Box::new(Optimist)).unwrap();
    let report = run(&small_cfg(30), &registry).unwrap();
    let negatives = report
        .trials
        .iter()
        .filter(|t| t.reference().unwrap().verdict == Verdict::NotHamiltonian)
        .count();
    assert_eq!(report.tally("optimist").unwrap().disagreements, negatives);
    assert!(report
        .summary_lines()
        .iter()
        .any(|l| l.starts_with("- optimist: ")));
}

#[test]
fn faults_are_isolated_and_not_compared() {
    let mut registry = Registry::builtin();
    registry.register(Box::new(Flaky)).unwrap();
    let report = run(&small_cfg(30), &registry).unwrap();
    assert_eq!(report.trials.len(), 30);
    let even = report.trials.iter().filter(|t| t.n % 2 == 0).count();
    assert!(even > 0);
    let flaky = report.tally("flaky").unwrap();
    assert_eq!(flaky.faults, even);
    assert_eq!(flaky.disagreements, 0);
    for t in &report.trials {
        let o = t.outcome("flaky").unwrap();
        assert_eq!(o.verdict.is_fault(), t.n % 2 == 0);
        // A fault leaves the other outcomes of the trial in place.
        assert_eq!(t.outcomes.len(), 4);
    }
    assert!(report.lines.iter().any(|l| l.contains("flaky: error - even size not supported")));
}

#[test]
fn unknown_reference_is_reported() {
    let cfg = HarnessCfg {
        reference: "nope".to_string(),
        ..small_cfg(3)
    };
    assert_eq!(
        run_builtin(&cfg).unwrap_err(),
        RegistryError::UnknownAlgorithm {
            name: "nope".to_string()
        }
    );
}

#[test]
fn alternate_reference_moves_dfs_into_tallies() {
    let cfg = HarnessCfg {
        reference: "exponential".to_string(),
        ..small_cfg(10)
    };
    let report = run_builtin(&cfg).unwrap();
    assert_eq!(report.reference, "exponential");
    for t in &report.trials {
        assert_eq!(t.outcomes[0].algorithm, "exponential");
        assert_eq!(t.outcomes.len(), 3);
    }
    assert_eq!(report.tally("dfs").unwrap().disagreements, 0);
    let mean = report.mean_elapsed("dfs").unwrap();
    let times: Vec<_> = report
        .trials
        .iter()
        .map(|t| t.outcome("dfs").unwrap().elapsed)
        .collect();
    assert!(times.iter().min().unwrap() <= &mean);
    assert!(&mean <= times.iter().max().unwrap());
    assert!(report.mean_elapsed("missing").is_none());
}

#[test]
fn heuristic_reference_is_rejected() {
    let cfg = HarnessCfg {
        reference: "greedy".to_string(),
        ..small_cfg(30)
    };
    let err = run_builtin(&cfg).unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotExact {
            name: "greedy".to_string()
        }
    );
    assert!(err.to_string().contains("heuristic"));

    let mut registry = Registry::builtin();
    registry.register(Box::new(Optimist)).unwrap();
    let cfg = HarnessCfg {
        reference: "optimist".to_string(),
        ..small_cfg(3)
    };
    assert!(matches!(
        run(&cfg, &registry),
        Err(RegistryError::NotExact { .. })
    ));
}
