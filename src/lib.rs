//! # Cluster Log CSV
//!
//! Converts the text log produced by running several clustering implementations
//! into one CSV file per implementation.
//!
//! A log looks like this, with any amount of unrelated output in between:
//!
//! ```text
//! ===== Running KMeans on datasetA =====
//! Cluster 0
//! Point 1: 0.5 1.2 - Alice
//! Point 2: 0.7 1.9
//! Cluster 1
//! Point 3: 2.1 0.3 - Bob
//! ```
//!
//! which becomes `KMeans_clusters.csv`:
//!
//! ```text
//! Point ID,Feature 1,Feature 2,Name,Cluster
//! 1,0.5,1.2,Alice,0
//! 2,0.7,1.9,,0
//! 3,2.1,0.3,Bob,1
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use cluster_log_csv::{ClusterLogReader, CsvWriter};
//!
//! let runs = ClusterLogReader::from_file("results.txt")?.read_all()?;
//!
//! let stats = CsvWriter::new("cluster_results").write(&runs)?;
//! println!("{}", stats.summary());
//! # Ok::<(), cluster_log_csv::Error>(())
//! ```
//!
//! ## Behavior Notes
//!
//! - Values are copied as text; nothing is reformatted.
//! - If any point of an implementation has a name, its file gets a `Name`
//!   column and unnamed points leave it empty.
//! - The feature column count comes from the first point. Later points with a
//!   different count are written as-is unless [`CsvWriter::strict`] is set.
//! - A repeated implementation header discards the points collected so far
//!   for that name.
//! - Implementations without points produce a warning and no file.

// Public API modules
pub mod error;
pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use error::{Error, Result};
pub use reader::ClusterLogReader;
pub use writer::{CsvWriter, CsvWriterBuilder, WriteStats};

pub use models::{ImplementationRun, PointRecord, RunSet};
pub use schema::RunSchema;

// Building blocks of the pipeline
pub mod classifier;
pub mod models;
pub mod parser;
pub mod schema;
