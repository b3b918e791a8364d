use std::path::PathBuf;

use tracing::{info, info_span, warn};

use roster_model::RawTable;

use crate::csv_table::read_csv_path;
use crate::error::IngestError;

/// Raw rows plus a note on where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTable {
    pub table: RawTable,
    /// Human-readable description of the source that produced the rows.
    pub origin: String,
    /// Set when a fallback source replaced a failed primary.
    pub fallback_reason: Option<String>,
}

impl LoadedTable {
    pub fn new(table: RawTable, origin: impl Into<String>) -> Self {
        Self {
            table,
            origin: origin.into(),
            fallback_reason: None,
        }
    }

    /// One-line status suitable for showing the user.
    pub fn status_message(&self) -> String {
        match &self.fallback_reason {
            Some(reason) => format!(
                "Data loaded from the {} (primary source failed: {reason}).",
                self.origin
            ),
            None => format!("Raw data loaded from {}.", self.origin),
        }
    }
}

/// Anything that can produce a header list and raw rows.
pub trait RosterSource {
    fn describe(&self) -> String;

    fn load(&self) -> Result<LoadedTable, IngestError>;
}

impl<S: RosterSource + ?Sized> RosterSource for &S {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn load(&self) -> Result<LoadedTable, IngestError> {
        (**self).load()
    }
}

impl<S: RosterSource + ?Sized> RosterSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn load(&self) -> Result<LoadedTable, IngestError> {
        (**self).load()
    }
}

/// A CSV file on local disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn load(&self) -> Result<LoadedTable, IngestError> {
        let table = read_csv_path(&self.path)?;
        Ok(LoadedTable::new(table, self.describe()))
    }
}

/// Tries `primary` once and substitutes `fallback` on any failure.
pub struct FallbackSource<P, F> {
    primary: P,
    fallback: F,
}

impl<P: RosterSource, F: RosterSource> FallbackSource<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: RosterSource, F: RosterSource> RosterSource for FallbackSource<P, F> {
    fn describe(&self) -> String {
        format!(
            "{} (fallback: {})",
            self.primary.describe(),
            self.fallback.describe()
        )
    }

    fn load(&self) -> Result<LoadedTable, IngestError> {
        let span = info_span!("ingest", source = %self.primary.describe());
        let _guard = span.enter();
        let primary_error = match self.primary.load() {
            Ok(loaded) => {
                info!(rows = loaded.table.rows.len(), "loaded primary source");
                return Ok(loaded);
            }
            Err(error) => error,
        };
        warn!(
            error = %primary_error,
            fallback = %self.fallback.describe(),
            "primary roster source failed; using fallback"
        );
        match self.fallback.load() {
            Ok(mut loaded) => {
                info!(rows = loaded.table.rows.len(), "loaded fallback source");
                loaded.fallback_reason = Some(primary_error.to_string());
                Ok(loaded)
            }
            Err(fallback_error) => Err(IngestError::AllSourcesFailed {
                primary: Box::new(primary_error),
                fallback: Box::new(fallback_error),
            }),
        }
    }
}
