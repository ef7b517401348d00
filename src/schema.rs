//! Per-implementation CSV column layout.

use crate::error::{Error, Result};
use crate::models::{ImplementationRun, PointRecord};

pub const POINT_ID_HEADER: &str = "Point ID";
pub const NAME_HEADER: &str = "Name";
pub const CLUSTER_HEADER: &str = "Cluster";

/// Column layout for one implementation's output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSchema {
    /// Taken from the first point of the run.
    pub feature_count: usize,
    pub has_names: bool,
}

impl RunSchema {
    /// Infer the schema for a run, or `None` if the run has no points.
    pub fn infer(run: &ImplementationRun) -> Option<Self> {
        let first = run.points.first()?;
        Some(Self {
            feature_count: first.features.len(),
            has_names: run.has_names,
        })
    }

    /// Number of columns in a row that matches this schema.
    pub fn width(&self) -> usize {
        self.feature_count + if self.has_names { 3 } else { 2 }
    }

    /// `Point ID, Feature 1..n, [Name,] Cluster`
    pub fn headers(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.width());
        headers.push(POINT_ID_HEADER.to_string());
        headers.extend((1..=self.feature_count).map(|i| format!("Feature {}", i)));
        if self.has_names {
            headers.push(NAME_HEADER.to_string());
        }
        headers.push(CLUSTER_HEADER.to_string());
        headers
    }

    /// Lay out a point as a row. Features are emitted as found, so a point
    /// with a different feature count yields a row of a different width.
    pub fn row_for<'a>(&self, point: &'a PointRecord) -> Vec<&'a str> {
        let mut row = Vec::with_capacity(point.features.len() + 3);
        row.push(point.point_id.as_str());
        row.extend(point.features.iter().map(String::as_str));
        if self.has_names {
            row.push(point.name.as_deref().unwrap_or(""));
        }
        row.push(point.cluster_id.as_str());
        row
    }

    /// Check that every point in `run` has `feature_count` features.
    ///
    /// # Errors
    ///
    /// Returns `Error::SchemaError` naming the first point that disagrees.
    pub fn check_consistency(&self, run: &ImplementationRun) -> Result<()> {
        match run
            .points
            .iter()
            .find(|p| p.features.len() != self.feature_count)
        {
            Some(point) => Err(Error::SchemaError(format!(
                "{}: point {} has {} features, expected {}",
                run.name,
                point.point_id,
                point.features.len(),
                self.feature_count
            ))),
            None => Ok(()),
        }
    }
}
