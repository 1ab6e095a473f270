//! Short consistency run printed to stdout.
//!
//! Runs 30 trials on 6–9 vertex graphs and prints the per-trial lines, the
//! disagreement summary, and mean timings per algorithm. Useful as a quick sanity
//! check after touching any search.
//!
//!   cargo run -p hamilton --example consistency

use hamilton::api::{run_builtin, HarnessCfg, VertexCount};

fn main() {
    let cfg = HarnessCfg {
        trials: 30,
        vertices: VertexCount::Uniform { min: 6, max: 9 },
        seed: 2024,
        ..HarnessCfg::default()
    };
    let report = run_builtin(&cfg).expect("dfs is registered");
    for line in &report.lines {
        println!("{line}");
    }
    println!();
    for name in std::iter::once(report.reference.as_str())
        .chain(report.tallies.iter().map(|t| t.algorithm.as_str()))
    {
        if let Some(mean) = report.mean_elapsed(name) {
            println!("mean {name}: {:.3} ms", mean.as_secs_f64() * 1e3);
        }
    }
}
