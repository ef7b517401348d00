//! High-level API for writing parsed runs to CSV files.

use csv::{Terminator, WriterBuilder};
use log::{info, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::{ImplementationRun, RunSet};
use crate::schema::RunSchema;

/// Directory used when no output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "cluster_results";
/// Appended to the implementation name to form the file name.
pub const DEFAULT_SUFFIX: &str = "_clusters.csv";

/// Writer that emits one CSV file per implementation run.
///
/// # Examples
///
/// ```no_run
/// use cluster_log_csv::{ClusterLogReader, CsvWriter};
///
/// let runs = ClusterLogReader::from_file("results.txt")?.read_all()?;
///
/// let stats = CsvWriter::new("cluster_results").write(&runs)?;
/// println!("{}", stats.summary());
/// # Ok::<(), cluster_log_csv::Error>(())
/// ```
pub struct CsvWriter {
    output_directory: PathBuf,
    suffix: String,
    strict: bool,
}

impl CsvWriter {
    /// Create a writer targeting `output_directory`, which is created on
    /// first write if it does not exist.
    pub fn new<P: AsRef<Path>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.as_ref().to_path_buf(),
            suffix: DEFAULT_SUFFIX.to_string(),
            strict: false,
        }
    }

    /// Set the file name suffix. Default is `_clusters.csv`.
    pub fn suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Reject runs whose points disagree on feature count.
    ///
    /// Off by default, in which case rows are written with whatever width
    /// their point has.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Path of the file a run named `name` is written to.
    ///
    /// Path separators in the name are replaced with `_` so every file
    /// lands directly inside the output directory.
    pub fn output_path_for(&self, name: &str) -> PathBuf {
        let file_stem: String = name
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.output_directory
            .join(format!("{}{}", file_stem, self.suffix))
    }

    /// Write every run that has at least one point.
    ///
    /// Runs without points are skipped with a warning and reported in the
    /// returned stats. Every run is checked before the first file is
    /// created, so a rejected write leaves no partial output behind.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output directory cannot be created
    /// - Two implementation names map to the same file name
    /// - Strict mode is on and a run has inconsistent feature counts
    /// - A CSV file cannot be created or written
    pub fn write(&self, runs: &RunSet) -> Result<WriteStats> {
        if self.output_directory.exists() && !self.output_directory.is_dir() {
            return Err(Error::OutputError(format!(
                "'{}' exists and is not a directory",
                self.output_directory.display()
            )));
        }

        let mut stats = WriteStats::default();
        let mut planned = Vec::new();
        let mut claimed: HashMap<PathBuf, &str> = HashMap::new();

        for run in runs {
            let Some(schema) = RunSchema::infer(run) else {
                warn!("⚠️ No data found for {}. Skipping CSV generation.", run.name);
                stats.skipped.push(run.name.clone());
                continue;
            };

            if self.strict {
                schema.check_consistency(run)?;
            }

            let path = self.output_path_for(&run.name);
            if let Some(other) = claimed.insert(path.clone(), run.name.as_str()) {
                return Err(Error::OutputError(format!(
                    "implementations '{}' and '{}' would both be written to '{}'",
                    other,
                    run.name,
                    path.display()
                )));
            }
            planned.push((run, schema, path));
        }

        fs::create_dir_all(&self.output_directory)?;

        for (run, schema, path) in planned {
            let file = File::create(&path)?;
            write_run_to_writer(run, &schema, file)?;

            info!("CSV file generated: {}", path.display());
            stats.files.push(WrittenFile {
                implementation: run.name.clone(),
                path,
                rows: run.len(),
                columns: schema.width(),
            });
        }

        Ok(stats)
    }
}

/// Write one run as CSV to any writer: header row first, then one row per point.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_run_to_writer<W: Write>(
    run: &ImplementationRun,
    schema: &RunSchema,
    writer: W,
) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(schema.headers())?;
    for point in &run.points {
        csv_writer.write_record(schema.row_for(point))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// One CSV file produced by a write.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    pub implementation: String,
    pub path: PathBuf,
    pub rows: usize,
    /// Header width
    pub columns: usize,
}

/// Statistics about a CSV write operation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WriteStats {
    /// Files written, in run order
    pub files: Vec<WrittenFile>,
    /// Implementations skipped because they had no points
    pub skipped: Vec<String>,
}

impl WriteStats {
    /// Total number of data rows written across all files.
    pub fn total_rows(&self) -> usize {
        self.files.iter().map(|f| f.rows).sum()
    }

    /// Get a human-readable summary of the write operation.
    pub fn summary(&self) -> String {
        format!(
            "Wrote {} rows across {} file(s), skipped {} empty implementation(s)",
            self.total_rows(),
            self.files.len(),
            self.skipped.len()
        )
    }
}

/// Builder for configuring CSV write options.
///
/// # Examples
///
/// ```no_run
/// use cluster_log_csv::{ClusterLogReader, CsvWriterBuilder};
///
/// let runs = ClusterLogReader::from_file("results.txt")?.read_all()?;
///
/// CsvWriterBuilder::new()
///     .output_directory("./out")
///     .suffix(".csv")
///     .strict(true)
///     .build()?
///     .write(&runs)?;
/// # Ok::<(), cluster_log_csv::Error>(())
/// ```
pub struct CsvWriterBuilder {
    output_directory: Option<PathBuf>,
    suffix: String,
    strict: bool,
}

impl CsvWriterBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            output_directory: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            strict: false,
        }
    }

    /// Set the output directory.
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the file name suffix.
    pub fn suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Enable feature-count validation.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the CSV writer.
    ///
    /// # Errors
    ///
    /// Returns an error if output_directory was not set.
    pub fn build(self) -> Result<CsvWriter> {
        let output_directory = self
            .output_directory
            .ok_or_else(|| Error::Other("Output directory not set".to_string()))?;

        Ok(CsvWriter {
            output_directory,
            suffix: self.suffix,
            strict: self.strict,
        })
    }
}

impl Default for CsvWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
