use log::{debug, warn};
use std::io::BufRead;

use crate::classifier::{classify, split_point_body, LineEvent};
use crate::error::Result;
use crate::models::{PointRecord, RunSet};

/// Sequential parser that turns log lines into per-implementation point lists.
///
/// Context is the current implementation and the current cluster. A point
/// line only produces a record while both are set; otherwise it is skipped.
#[derive(Debug, Default)]
pub struct RunParser {
    runs: RunSet,
    current_implementation: Option<usize>,
    current_cluster: Option<String>,
    lines_seen: usize,
    skipped_points: usize,
}

impl RunParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one line to the parser state.
    pub fn feed_line(&mut self, line: &str) {
        self.lines_seen += 1;

        match classify(line) {
            Some(LineEvent::ImplementationHeader { name }) => {
                if self.runs.get(name).is_some() {
                    warn!(
                        "Implementation '{}' seen again at line {}; discarding its earlier points",
                        name, self.lines_seen
                    );
                }
                self.current_implementation = Some(self.runs.begin(name));
                self.current_cluster = None;
            }
            Some(LineEvent::ClusterHeader { cluster_id }) => {
                if self.current_implementation.is_some() {
                    self.current_cluster = Some(cluster_id.to_string());
                }
            }
            Some(LineEvent::Point { point_id, rest }) => {
                let (Some(idx), Some(cluster)) =
                    (self.current_implementation, self.current_cluster.as_ref())
                else {
                    debug!(
                        "Skipping point {} at line {}: no active cluster",
                        point_id, self.lines_seen
                    );
                    self.skipped_points += 1;
                    return;
                };

                let (features, name) = split_point_body(rest);
                let record =
                    PointRecord::new(point_id.to_string(), features, name, cluster.clone());
                if let Some(run) = self.runs.run_mut(idx) {
                    run.push(record);
                }
            }
            None => {}
        }
    }

    /// Feed every line of an in-memory log.
    pub fn feed_str(&mut self, text: &str) {
        for line in text.lines() {
            self.feed_line(line);
        }
    }

    /// Stream lines from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `reader` fails or yields invalid UTF-8.
    pub fn feed_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            self.feed_line(&line?);
        }
        Ok(())
    }

    /// Number of lines consumed so far.
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Number of point lines dropped because no cluster was active.
    pub fn skipped_points(&self) -> usize {
        self.skipped_points
    }

    pub fn finish(self) -> RunSet {
        self.runs
    }
}

/// Parse a whole log held in memory.
pub fn parse_str(text: &str) -> RunSet {
    let mut parser = RunParser::new();
    parser.feed_str(text);
    parser.finish()
}
