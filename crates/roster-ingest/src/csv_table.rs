use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use roster_model::{RawRow, RawTable};

use crate::error::IngestError;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Cell values keep their surrounding whitespace; only a leading BOM goes.
fn normalize_cell(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Reads CSV text whose first non-blank line is the header.
///
/// Rows shorter than the header get empty strings for the missing columns;
/// cells beyond the header are dropped. Blank lines are skipped.
pub fn read_csv_reader<R: Read>(reader: R, origin: &str) -> Result<RawTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut headers: Vec<String> = Vec::new();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            origin: origin.to_string(),
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if headers.is_empty() {
            headers = record.iter().map(normalize_header).collect();
            continue;
        }
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).map(normalize_cell).unwrap_or_default();
                (header.clone(), value)
            })
            .collect();
        rows.push(row);
    }
    debug!(origin, columns = headers.len(), rows = rows.len(), "parsed csv");
    Ok(RawTable::new(headers, rows))
}

pub fn read_csv_str(contents: &str, origin: &str) -> Result<RawTable, IngestError> {
    read_csv_reader(contents.as_bytes(), origin)
}

pub fn read_csv_path(path: &Path) -> Result<RawTable, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_reader(file, &path.display().to_string())
}
