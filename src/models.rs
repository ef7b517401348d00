use serde::Serialize;
use std::collections::HashMap;

/// One labeled point extracted from a `Point <id>: ...` line.
///
/// Every field keeps the exact text found in the log; feature values are
/// never parsed to floats so their formatting survives into the CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointRecord {
    pub point_id: String,
    pub features: Vec<String>,
    pub name: Option<String>,
    pub cluster_id: String,
}

impl PointRecord {
    pub fn new(
        point_id: String,
        features: Vec<String>,
        name: Option<String>,
        cluster_id: String,
    ) -> Self {
        Self {
            point_id,
            features,
            name,
            cluster_id,
        }
    }
}

/// All points collected for one named implementation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImplementationRun {
    pub name: String,
    pub points: Vec<PointRecord>,
    /// Set once any point in the run carries a name.
    pub has_names: bool,
}

impl ImplementationRun {
    pub fn new(name: String) -> Self {
        Self {
            name,
            points: Vec::new(),
            has_names: false,
        }
    }

    pub fn push(&mut self, point: PointRecord) {
        if point.name.is_some() {
            self.has_names = true;
        }
        self.points.push(point);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Implementation runs keyed by name, in order of first appearance.
///
/// A repeated implementation header resets the existing run in place: its
/// previous points are discarded but its position in the ordering is kept.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSet {
    runs: Vec<ImplementationRun>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    /// Number of headers that replaced an already-seen implementation.
    pub overwritten: usize,
}

impl RunSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the run called `name` and return its position.
    pub fn begin(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            self.runs[idx] = ImplementationRun::new(name.to_string());
            self.overwritten += 1;
            return idx;
        }

        let idx = self.runs.len();
        self.runs.push(ImplementationRun::new(name.to_string()));
        self.index.insert(name.to_string(), idx);
        idx
    }

    pub fn get(&self, name: &str) -> Option<&ImplementationRun> {
        self.index.get(name).map(|&idx| &self.runs[idx])
    }

    pub(crate) fn run_mut(&mut self, idx: usize) -> Option<&mut ImplementationRun> {
        self.runs.get_mut(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImplementationRun> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total number of points across all runs.
    pub fn total_points(&self) -> usize {
        self.runs.iter().map(ImplementationRun::len).sum()
    }
}

impl<'a> IntoIterator for &'a RunSet {
    type Item = &'a ImplementationRun;
    type IntoIter = std::slice::Iter<'a, ImplementationRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
