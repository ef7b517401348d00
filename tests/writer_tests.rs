mod common;

use cluster_log_csv::parser::parse_str;
use cluster_log_csv::schema::RunSchema;
use cluster_log_csv::writer::write_run_to_writer;
use cluster_log_csv::{CsvWriter, CsvWriterBuilder, Error};
use common::{kmeans_example, LogBuilder};
use std::fs;
use tempfile::tempdir;

// ============================================================================
// FILE OUTPUT TESTS
// ============================================================================

#[test]
fn test_worked_example_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("cluster_results");

    let runs = parse_str(&kmeans_example());
    let stats = CsvWriter::new(&out).write(&runs).unwrap();

    assert_eq!(stats.files.len(), 1);
    assert_eq!(stats.files[0].path, out.join("KMeans_clusters.csv"));

    let csv = fs::read_to_string(out.join("KMeans_clusters.csv")).unwrap();
    assert_eq!(
        csv,
        "Point ID,Feature 1,Feature 2,Name,Cluster\n\
         1,0.5,1.2,Alice,0\n\
         2,0.7,1.9,,0\n\
         3,2.1,0.3,Bob,1\n"
    );
}

#[test]
fn test_unnamed_run_has_no_name_column() {
    let dir = tempdir().unwrap();

    let log = LogBuilder::new()
        .implementation("Serial", "d")
        .cluster(1)
        .point(1, &["1", "2", "3"])
        .point(2, &["4", "5", "6"])
        .build();

    CsvWriter::new(dir.path()).write(&parse_str(&log)).unwrap();

    let csv = fs::read_to_string(dir.path().join("Serial_clusters.csv")).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "Point ID,Feature 1,Feature 2,Feature 3,Cluster");
    assert_eq!(lines[1], "1,1,2,3,1");
    assert_eq!(lines[2], "2,4,5,6,1");
    assert!(lines.iter().all(|l| l.split(',').count() == 5));
}

#[test]
fn test_empty_implementation_is_skipped() {
    let dir = tempdir().unwrap();

    let log = LogBuilder::new()
        .implementation("Empty", "d")
        .timing_footer()
        .implementation("Full", "d")
        .cluster(0)
        .point(1, &["1.0"])
        .build();

    let stats = CsvWriter::new(dir.path()).write(&parse_str(&log)).unwrap();

    assert_eq!(stats.skipped, vec!["Empty".to_string()]);
    assert_eq!(stats.files.len(), 1);
    assert!(!dir.path().join("Empty_clusters.csv").exists());
    assert!(dir.path().join("Full_clusters.csv").exists());
}

#[test]
fn test_one_file_per_implementation_with_points() {
    let dir = tempdir().unwrap();

    let log = LogBuilder::new()
        .implementation("A", "d")
        .cluster(0)
        .point(1, &["1"])
        .implementation("B", "d")
        .implementation("C", "d")
        .cluster(0)
        .point(1, &["1"])
        .implementation("A", "d")
        .cluster(2)
        .point(7, &["7"])
        .build();

    let stats = CsvWriter::new(dir.path()).write(&parse_str(&log)).unwrap();
    assert_eq!(stats.files.len(), 2);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);

    let a = fs::read_to_string(dir.path().join("A_clusters.csv")).unwrap();
    assert_eq!(a, "Point ID,Feature 1,Cluster\n7,7,2\n");
}

#[test]
fn test_rewrite_is_byte_identical() {
    let dir = tempdir().unwrap();
    let runs = parse_str(&kmeans_example());
    let path = dir.path().join("KMeans_clusters.csv");

    CsvWriter::new(dir.path()).write(&runs).unwrap();
    let first = fs::read(&path).unwrap();

    CsvWriter::new(dir.path()).write(&runs).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_nested_output_directory_is_created() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("a").join("b").join("c");

    CsvWriter::new(&out).write(&parse_str(&kmeans_example())).unwrap();
    assert!(out.join("KMeans_clusters.csv").exists());
}

#[test]
fn test_output_path_that_is_a_file_fails() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("not_a_dir");
    fs::write(&out, "occupied").unwrap();

    let result = CsvWriter::new(&out).write(&parse_str(&kmeans_example()));
    assert!(matches!(result, Err(Error::OutputError(_))));
}

#[test]
fn test_custom_suffix_and_path_separators() {
    let dir = tempdir().unwrap();

    let log = LogBuilder::new()
        .implementation("omp/4-threads", "d")
        .cluster(0)
        .point(1, &["1"])
        .build();

    let writer = CsvWriter::new(dir.path()).suffix(".csv");
    assert_eq!(
        writer.output_path_for("omp/4-threads"),
        dir.path().join("omp_4-threads.csv")
    );

    writer.write(&parse_str(&log)).unwrap();
    assert!(dir.path().join("omp_4-threads.csv").exists());
}

#[test]
fn test_names_sharing_a_file_name_are_rejected() {
    let dir = tempdir().unwrap();

    let log = LogBuilder::new()
        .implementation("omp/4", "d")
        .cluster(0)
        .point(1, &["1", "2"])
        .implementation("omp_4", "d")
        .cluster(0)
        .point(9, &["9", "9", "9"])
        .build();

    let result = CsvWriter::new(dir.path()).write(&parse_str(&log));
    match result {
        Err(Error::OutputError(msg)) => {
            assert!(msg.contains("'omp/4'"));
            assert!(msg.contains("'omp_4'"));
        }
        other => panic!(
            "expected an output error, got {:?}",
            other.map(|s| s.files.len())
        ),
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

// ============================================================================
// CSV QUOTING AND SCHEMA TESTS
// ============================================================================

#[test]
fn test_fields_with_commas_and_quotes_are_quoted() {
    let log = LogBuilder::new()
        .implementation("KMeans", "d")
        .cluster(0)
        .named_point(1, &["1.5"], "Smith, \"Jo\"")
        .build();

    let runs = parse_str(&log);
    let run = runs.get("KMeans").unwrap();
    let schema = RunSchema::infer(run).unwrap();

    let mut buf = Vec::new();
    write_run_to_writer(run, &schema, &mut buf).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Point ID,Feature 1,Name,Cluster\n1,1.5,\"Smith, \"\"Jo\"\"\",0\n"
    );
}

#[test]
fn test_jagged_rows_are_written_by_default() {
    let dir = tempdir().unwrap();

    let log = LogBuilder::new()
        .implementation("KMeans", "d")
        .cluster(0)
        .point(1, &["1", "2"])
        .point(2, &["3", "4", "5"])
        .build();

    CsvWriter::new(dir.path()).write(&parse_str(&log)).unwrap();

    let csv = fs::read_to_string(dir.path().join("KMeans_clusters.csv")).unwrap();
    assert_eq!(csv, "Point ID,Feature 1,Feature 2,Cluster\n1,1,2,0\n2,3,4,5,0\n");
}

#[test]
fn test_strict_mode_rejects_jagged_rows() {
    let dir = tempdir().unwrap();

    let log = LogBuilder::new()
        .implementation("KMeans", "d")
        .cluster(0)
        .point(1, &["1", "2"])
        .point(2, &["3"])
        .build();

    let writer = CsvWriterBuilder::new()
        .output_directory(dir.path())
        .strict(true)
        .build()
        .unwrap();

    let result = writer.write(&parse_str(&log));
    assert!(matches!(result, Err(Error::SchemaError(_))));
    assert!(!dir.path().join("KMeans_clusters.csv").exists());
}

#[test]
fn test_strict_mode_writes_nothing_when_a_later_run_is_jagged() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");

    let log = LogBuilder::new()
        .implementation("Good", "d")
        .cluster(0)
        .point(1, &["1", "2"])
        .implementation("Jagged", "d")
        .cluster(0)
        .point(1, &["1", "2"])
        .point(2, &["3"])
        .build();

    let result = CsvWriter::new(&out).strict(true).write(&parse_str(&log));
    assert!(matches!(result, Err(Error::SchemaError(_))));
    assert!(!out.join("Good_clusters.csv").exists());
}

#[test]
fn test_builder_requires_output_directory() {
    let result = CsvWriterBuilder::new().build();
    assert!(matches!(result, Err(Error::Other(_))));
}

#[test]
fn test_write_stats_summary() {
    let dir = tempdir().unwrap();

    let mut runs = parse_str(&kmeans_example());
    runs.begin("Empty");

    let stats = CsvWriter::new(dir.path()).write(&runs).unwrap();
    assert_eq!(stats.total_rows(), 3);
    assert_eq!(
        stats.summary(),
        "Wrote 3 rows across 1 file(s), skipped 1 empty implementation(s)"
    );
    assert_eq!(stats.files[0].columns, 5);
}
