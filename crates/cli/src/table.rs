//! Per-invocation timing tables (one row per trial × algorithm) via Polars.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use hamilton::api::Report;
use polars::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Self::Csv),
            Some("parquet") => Ok(Self::Parquet),
            _ => bail!(
                "unsupported table extension for {} (use .csv or .parquet)",
                path.display()
            ),
        }
    }
}

/// Columns: trial, n, edges, algorithm, verdict (yes/no/fault), elapsed_ms.
pub fn timings_frame(report: &Report) -> PolarsResult<DataFrame> {
    let mut trial = Vec::new();
    let mut n = Vec::new();
    let mut edges = Vec::new();
    let mut algorithm = Vec::new();
    let mut verdict = Vec::new();
    let mut elapsed_ms = Vec::new();
    for t in &report.trials {
        let edge_count = t.graph.edge_count() as u32;
        for o in &t.outcomes {
            trial.push(t.index as u32 + 1);
            n.push(t.n as u32);
            edges.push(edge_count);
            algorithm.push(o.algorithm.clone());
            verdict.push(o.verdict.tag());
            elapsed_ms.push(o.elapsed_ms());
        }
    }
    df!(
        "trial" => trial,
        "n" => n,
        "edges" => edges,
        "algorithm" => algorithm,
        "verdict" => verdict,
        "elapsed_ms" => elapsed_ms
    )
}

pub fn write_table(report: &Report, out: &Path) -> Result<()> {
    let format = TableFormat::from_path(out)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut df = timings_frame(report)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match format {
        TableFormat::Csv => {
            CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        }
        TableFormat::Parquet => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
    }
    tracing::info!(rows = df.height(), out = %out.display(), "timing_table");
    Ok(())
}

/// Per (algorithm, n): run count, mean/max elapsed, and how many runs said yes.
pub fn summarize(from: &Path) -> Result<DataFrame> {
    let lf = match TableFormat::from_path(from)? {
        TableFormat::Csv => LazyCsvReader::new(from)
            .with_infer_schema_length(Some(100))
            .finish()?,
        TableFormat::Parquet => LazyFrame::scan_parquet(from, ScanArgsParquet::default())?,
    };
    let df = lf
        .group_by([col("algorithm"), col("n")])
        .agg([
            len().alias("runs"),
            col("elapsed_ms").mean().alias("mean_ms"),
            col("elapsed_ms").max().alias("max_ms"),
            col("verdict").eq(lit("yes")).sum().alias("hamiltonian"),
        ])
        .sort_by_exprs([col("algorithm"), col("n")], SortMultipleOptions::default())
        .collect()?;
    Ok(df)
}
