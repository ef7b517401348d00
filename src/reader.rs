//! High-level API for reading clustering run logs.

use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::models::RunSet;
use crate::parser::RunParser;

/// Default log file name.
pub const DEFAULT_INPUT: &str = "results.txt";

enum Source {
    File(BufReader<File>),
    Text(String),
}

/// A reader for clustering run logs.
///
/// # Examples
///
/// ```no_run
/// use cluster_log_csv::ClusterLogReader;
///
/// let runs = ClusterLogReader::from_file("results.txt")?.read_all()?;
/// for run in &runs {
///     println!("{}: {} points", run.name, run.len());
/// }
/// # Ok::<(), cluster_log_csv::Error>(())
/// ```
pub struct ClusterLogReader {
    source: Source,
}

impl ClusterLogReader {
    /// Open a log file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self {
            source: Source::File(BufReader::new(file)),
        })
    }

    /// Read a log from any reader by buffering its full contents.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the data is not valid UTF-8.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_string(text))
    }

    /// Use log text already held in memory.
    pub fn from_string<S: Into<String>>(text: S) -> Self {
        Self {
            source: Source::Text(text.into()),
        }
    }

    /// Parse the whole log into implementation runs.
    ///
    /// File input is streamed line by line; points stay buffered per run
    /// until the log is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying file cannot be read.
    pub fn read_all(self) -> Result<RunSet> {
        let mut parser = RunParser::new();
        match self.source {
            Source::File(reader) => parser.feed_reader(reader)?,
            Source::Text(text) => parser.feed_str(&text),
        }

        debug!(
            "Parsed {} lines, skipped {} out-of-context point line(s)",
            parser.lines_seen(),
            parser.skipped_points()
        );
        Ok(parser.finish())
    }
}
