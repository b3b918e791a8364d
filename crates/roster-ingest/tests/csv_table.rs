//! Tests for CSV table parsing.

use std::fs;

use roster_ingest::{IngestError, read_csv_path, read_csv_str};

#[test]
fn reads_headers_and_rows_in_column_order() {
    let table = read_csv_str(
        "name,department,salary\nAna,TI,\"5500,50\"\nBia,RH,4200\n",
        "inline",
    )
    .expect("read csv");
    assert_eq!(table.headers, vec!["name", "department", "salary"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].get("salary"), Some("5500,50"));
    let columns: Vec<&str> = table.rows[1].iter().map(|(key, _)| key).collect();
    assert_eq!(columns, vec!["name", "department", "salary"]);
}

#[test]
fn headers_are_trimmed_but_cells_are_not() {
    let table = read_csv_str("\u{feff}name , salary\n  Ana  , 10 \n", "inline").expect("read csv");
    assert_eq!(table.headers, vec!["name", "salary"]);
    assert_eq!(table.rows[0].get("name"), Some("  Ana  "));
    assert_eq!(table.rows[0].get("salary"), Some(" 10 "));
}

#[test]
fn pads_short_rows_and_drops_extra_cells() {
    let table = read_csv_str("a,b,c\n1\n1,2,3,4\n", "inline").expect("read csv");
    assert_eq!(table.rows[0].get("b"), Some(""));
    assert_eq!(table.rows[0].get("c"), Some(""));
    assert_eq!(table.rows[1].len(), 3);
    assert_eq!(table.rows[1].get("c"), Some("3"));
}

#[test]
fn skips_blank_lines() {
    let table = read_csv_str("\n\na,b\n\n1,2\n,\n3,4\n", "inline").expect("read csv");
    assert_eq!(table.headers, vec!["a", "b"]);
    assert_eq!(table.rows.len(), 2);
}

#[test]
fn empty_input_has_no_headers() {
    let table = read_csv_str("", "inline").expect("read csv");
    assert!(!table.has_headers());
    assert!(table.rows.is_empty());
}

#[test]
fn reads_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("roster.csv");
    fs::write(&path, "name,salary\nAna,1\n").expect("write file");
    let table = read_csv_path(&path).expect("read csv");
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = read_csv_path(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(error, IngestError::Io { .. }));
}
