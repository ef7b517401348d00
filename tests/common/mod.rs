/// Test utilities for building clustering run logs
#[allow(dead_code)]
pub struct LogBuilder {
    lines: Vec<String>,
}

#[allow(dead_code)]
impl LogBuilder {
    /// Create an empty log
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add an implementation banner
    pub fn implementation(mut self, name: &str, dataset: &str) -> Self {
        self.lines
            .push(format!("===== Running {} on {} =====", name, dataset));
        self
    }

    /// Add a cluster header
    pub fn cluster(mut self, id: u32) -> Self {
        self.lines.push(format!("Cluster {}", id));
        self
    }

    /// Add an unnamed point
    pub fn point(mut self, id: u32, features: &[&str]) -> Self {
        self.lines
            .push(format!("Point {}: {}", id, features.join(" ")));
        self
    }

    /// Add a named point
    pub fn named_point(mut self, id: u32, features: &[&str], name: &str) -> Self {
        self.lines
            .push(format!("Point {}: {} - {}", id, features.join(" "), name));
        self
    }

    /// Add a line verbatim, e.g. noise the clustering programs print
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add the timing footer the clustering programs print after each run
    pub fn timing_footer(self) -> Self {
        self.raw("Cluster values: 1.5 2.5 ")
            .raw("")
            .raw("TOTAL EXECUTION TIME = 1532 µs")
            .raw("THROUGHPUT = 97911.2 points per second")
    }

    /// Build the log text
    pub fn build(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// The worked example: two clusters, mixed named and unnamed points
#[allow(dead_code)]
pub fn kmeans_example() -> String {
    LogBuilder::new()
        .implementation("KMeans", "datasetA")
        .cluster(0)
        .named_point(1, &["0.5", "1.2"], "Alice")
        .point(2, &["0.7", "1.9"])
        .cluster(1)
        .named_point(3, &["2.1", "0.3"], "Bob")
        .build()
}
