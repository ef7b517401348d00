//! Line classification for clustering run logs.
//!
//! A log interleaves three kinds of interesting lines with arbitrary noise:
//!
//! ```text
//! ===== Running KMeans on datasetA =====
//! Cluster 0
//! Point 1: 0.5 1.2 - Alice
//! ```
//!
//! Each matcher searches anywhere in the line and returns the captured text,
//! or `None` when the line is not of that kind.

use once_cell::sync::Lazy;
use regex::Regex;

static IMPLEMENTATION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"===== Running (.+) on .+ =====").unwrap());
static CLUSTER_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"Cluster (\d+)").unwrap());
static POINT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Point (\d+): (.+)").unwrap());

/// Separator between the feature values and the optional point name.
pub const NAME_SEPARATOR: &str = " - ";

/// A classified log line, borrowing its captures from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent<'a> {
    ImplementationHeader { name: &'a str },
    ClusterHeader { cluster_id: &'a str },
    Point { point_id: &'a str, rest: &'a str },
}

/// Classify a line, trying implementation header, cluster header and point
/// line in that order. Returns `None` for lines that match nothing.
pub fn classify(line: &str) -> Option<LineEvent<'_>> {
    if let Some(name) = match_implementation_header(line) {
        return Some(LineEvent::ImplementationHeader { name });
    }
    if let Some(cluster_id) = match_cluster_header(line) {
        return Some(LineEvent::ClusterHeader { cluster_id });
    }
    match_point_line(line).map(|(point_id, rest)| LineEvent::Point { point_id, rest })
}

/// Match `===== Running <name> on <anything> =====`.
///
/// The name extends greedily up to the last ` on ` that is still followed by
/// a non-empty dataset and the closing banner.
pub fn match_implementation_header(line: &str) -> Option<&str> {
    IMPLEMENTATION_HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Match `Cluster <digits>` and return the digits as text.
pub fn match_cluster_header(line: &str) -> Option<&str> {
    CLUSTER_HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Match `Point <digits>: <rest>` and return `(point_id, rest)`.
pub fn match_point_line(line: &str) -> Option<(&str, &str)> {
    let caps = POINT_LINE.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Split the body of a point line into feature tokens and an optional name.
///
/// Everything after the first ` - ` is the name, verbatim, including any
/// further ` - ` sequences. The part before it is split on whitespace. A
/// blank name (nothing but whitespace after ` - `) counts as no name.
pub fn split_point_body(rest: &str) -> (Vec<String>, Option<String>) {
    let (values, name) = match rest.split_once(NAME_SEPARATOR) {
        Some((values, name)) if !name.trim().is_empty() => (values, Some(name.to_string())),
        Some((values, _)) => (values, None),
        None => (rest, None),
    };

    let features = values.split_whitespace().map(str::to_string).collect();
    (features, name)
}
