use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use hamilton::api::{
    backtrack_cycle, builtin_names, checked_search, draw_graph, greedy_path, permutation_cycle,
    resolve, run_builtin, BacktrackSearch, GraphMatrix, GreedySearch, HarnessCfg,
    PermutationSearch, RandomGraphCfg, Report, ReplayToken, VertexCount,
};
use hamilton::graph::rand::DEFAULT_EDGE_PROBABILITY;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "hamilton")]
#[command(about = "Hamiltonian cycle checks and cross-algorithm benchmarks")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Decide one adjacency matrix with a named algorithm
    Check {
        /// dfs | exponential | greedy
        #[arg(long, default_value = "dfs")]
        algo: String,
        /// File with one comma-separated row per line
        #[arg(long, conflicts_with = "matrix", required_unless_present = "matrix")]
        input: Option<PathBuf>,
        /// Inline matrix; rows separated by newlines or ';'
        #[arg(long)]
        matrix: Option<String>,
        /// Also print the tour (exact algorithms) or the greedy path
        #[arg(long)]
        show_path: bool,
    },
    /// Print a random symmetric adjacency matrix
    Generate {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = DEFAULT_EDGE_PROBABILITY)]
        p: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// Run every algorithm on random graphs and count disagreements with the reference
    Bench {
        #[arg(long, default_value_t = 100)]
        trials: usize,
        #[arg(long, default_value_t = 5)]
        min: usize,
        #[arg(long, default_value_t = 10)]
        max: usize,
        #[arg(long, default_value_t = DEFAULT_EDGE_PROBABILITY)]
        p: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Yield after every k-th trial (0 disables)
        #[arg(long, default_value_t = 10)]
        pause_every: usize,
        /// Exact algorithm to compare against (dfs | exponential)
        #[arg(long, default_value = "dfs")]
        reference: String,
        /// Timing table (.csv or .parquet); a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the summary as JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Aggregate a timing table written by `bench --out`
    Summarize {
        #[arg(long)]
        from: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            algo,
            input,
            matrix,
            show_path,
        } => check(&algo, input, matrix, show_path),
        Action::Generate { n, p, seed, index } => generate(n, p, seed, index),
        Action::Bench {
            trials,
            min,
            max,
            p,
            seed,
            pause_every,
            reference,
            out,
            json,
        } => {
            let cfg = HarnessCfg {
                trials,
                vertices: VertexCount::Uniform { min, max },
                edge_probability: p,
                seed,
                pause_every: (pause_every > 0).then_some(pause_every),
                reference,
            };
            bench(cfg, out, json)
        }
        Action::Summarize { from } => summarize(from),
        Action::Report => report(),
    }
}

/// Accept `;` as a row separator so matrices fit on one shell line.
fn matrix_text(input: Option<PathBuf>, matrix: Option<String>) -> Result<String> {
    match (input, matrix) {
        (Some(path), _) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display())),
        (None, Some(inline)) => Ok(inline.replace(';', "\n")),
        (None, None) => Err(anyhow!("pass --input or --matrix")),
    }
}

fn witness(algo: &str, graph: &GraphMatrix) -> Option<Vec<usize>> {
    match algo {
        BacktrackSearch::NAME => backtrack_cycle(graph),
        PermutationSearch::NAME => permutation_cycle(graph),
        GreedySearch::NAME => greedy_path(graph),
        _ => None,
    }
}

fn check(
    algo: &str,
    input: Option<PathBuf>,
    matrix: Option<String>,
    show_path: bool,
) -> Result<()> {
    let text = matrix_text(input, matrix)?;
    let graph = GraphMatrix::parse(&text).context("invalid matrix")?;
    if !graph.is_symmetric() {
        tracing::warn!("matrix is not symmetric; rows are read as directed adjacency");
    }
    let search = resolve(algo).map_err(|err| {
        anyhow!(
            "{err}; known algorithms: {}",
            builtin_names().collect::<Vec<_>>().join(", ")
        )
    })?;
    tracing::info!(algo, n = graph.size(), edges = graph.edge_count(), "check");

    let start = Instant::now();
    let found = checked_search(search, &graph)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    println!("{}", if found { "Hamiltonian" } else { "not Hamiltonian" });
    println!("time: {elapsed_ms:.2} ms");
    if !search.is_exact() {
        println!("note: {algo} is a heuristic; its answer is not authoritative");
    }
    if show_path && found {
        if let Some(path) = witness(algo, &graph) {
            let rendered: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            println!("path: {}", rendered.join(" -> "));
        }
    }
    Ok(())
}

fn generate(n: usize, p: f64, seed: u64, index: u64) -> Result<()> {
    let cfg = RandomGraphCfg {
        vertex_count: VertexCount::Fixed(n),
        edge_probability: p,
    };
    let graph = draw_graph(cfg, ReplayToken { seed, index });
    tracing::info!(n, p, seed, index, edges = graph.edge_count(), "generate");
    println!("{graph}");
    Ok(())
}

#[derive(Serialize)]
struct TallyRow<'a> {
    algorithm: &'a str,
    exact: bool,
    disagreements: usize,
    faults: usize,
    trials: usize,
    mean_ms: Option<f64>,
}

fn tally_rows(report: &Report) -> Vec<TallyRow<'_>> {
    report
        .tallies
        .iter()
        .map(|t| TallyRow {
            algorithm: &t.algorithm,
            exact: t.exact,
            disagreements: t.disagreements,
            faults: t.faults,
            trials: report.trials.len(),
            mean_ms: report
                .mean_elapsed(&t.algorithm)
                .map(|d| d.as_secs_f64() * 1e3),
        })
        .collect()
}

fn bench(cfg: HarnessCfg, out: Option<PathBuf>, json: bool) -> Result<()> {
    let report = run_builtin(&cfg)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tally_rows(&report))?);
    } else {
        for line in &report.lines {
            println!("{line}");
        }
    }

    if let Some(out) = out {
        table::write_table(&report, &out)?;
        let (min, max) = cfg.vertices.bounds();
        let payload = provenance::Payload::new(serde_json::json!({
            "trials": cfg.trials,
            "min": min,
            "max": max,
            "p": cfg.edge_probability,
            "seed": cfg.seed,
            "reference": cfg.reference,
        }));
        let sidecar = provenance::write_sidecar(&out, payload)?;
        tracing::info!(sidecar = %sidecar.display(), "provenance");
    }
    Ok(())
}

fn summarize(from: PathBuf) -> Result<()> {
    tracing::info!(from = %from.display(), "summarize");
    let df = table::summarize(&from)?;
    println!("{df}");
    Ok(())
}

fn report() -> Result<()> {
    let payload = provenance::Payload::new(serde_json::json!({}));
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
