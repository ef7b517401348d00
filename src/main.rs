//! Command-line interface for the cluster log converter.
//!
//! Reads a clustering results log and writes one CSV per implementation.

use anyhow::{Context, Result};
use clap::Parser;
use cluster_log_csv::reader::DEFAULT_INPUT;
use cluster_log_csv::writer::{DEFAULT_OUTPUT_DIR, DEFAULT_SUFFIX};
use cluster_log_csv::{ClusterLogReader, CsvWriter};
use log::{info, LevelFilter};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert clustering run logs to per-implementation CSV files",
    long_about = "Extracts the labeled points of every '===== Running <name> on <data> =====' \
                  section in a clustering results log and writes <name>_clusters.csv for each \
                  implementation that produced points."
)]
struct Args {
    /// Clustering results log
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory the CSV files are written to (created if missing)
    #[arg(short, long, value_name = "OUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Appended to each implementation name to form its file name
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Fail if points within an implementation have different feature counts
    #[arg(long)]
    strict: bool,

    /// Also write a JSON summary of written and skipped implementations
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let start_time = Instant::now();

    info!("📄 Processing: {}", args.input.display());

    let runs = ClusterLogReader::from_file(&args.input)
        .with_context(|| format!("failed to open '{}'", args.input.display()))?
        .read_all()?;

    info!(
        "   ├─ Found {} implementation(s), {} point(s)",
        runs.len(),
        runs.total_points()
    );
    if runs.overwritten > 0 {
        info!(
            "   ├─ {} repeated implementation header(s) replaced earlier data",
            runs.overwritten
        );
    }

    let stats = CsvWriter::new(&args.out_dir)
        .suffix(args.suffix)
        .strict(args.strict)
        .write(&runs)
        .with_context(|| format!("failed to write CSV files to '{}'", args.out_dir.display()))?;

    if let Some(path) = &args.summary {
        let file = File::create(path)
            .with_context(|| format!("failed to create summary '{}'", path.display()))?;
        serde_json::to_writer_pretty(file, &stats)?;
        info!("   ├─ Summary written to {}", path.display());
    }

    info!("   ├─ {}", stats.summary());
    info!("   └─ ✓ Total time: {:.2?}", start_time.elapsed());

    Ok(())
}
