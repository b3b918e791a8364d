//! One long-lived session: source configuration plus per-command ingestion.
//!
//! The session holds no roster. Every analytic command reads the source,
//! validates it into a fresh snapshot and runs against that value.

use std::path::PathBuf;

use tracing::{debug, info, info_span};

use roster_analytics::DEFAULT_OPTIMIZE_COUNT;
use roster_ingest::{
    DEFAULT_SHEET_URL, EmbeddedSource, FallbackSource, FileSource, IngestError, RosterSource,
    SheetSource,
};
use roster_model::ValidationError;
use roster_validate::{ValidatedRoster, validate_roster};

use crate::dispatch::{Command, FAREWELL_MESSAGE, INVALID_OPTION_MESSAGE, hidden_message};

/// Where rows come from and how analytics are parameterized.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub sheet_url: String,
    /// Local CSV used as the primary source instead of the sheet.
    pub csv_path: Option<PathBuf>,
    /// Skip remote and file sources and read the embedded dataset only.
    pub offline: bool,
    /// Number of employees considered by the savings projection.
    pub optimize_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sheet_url: DEFAULT_SHEET_URL.to_string(),
            csv_path: None,
            offline: false,
            optimize_count: DEFAULT_OPTIMIZE_COUNT,
        }
    }
}

impl SessionConfig {
    /// Builds the primary → embedded fallback chain.
    pub fn build_source(&self) -> Box<dyn RosterSource> {
        if self.offline {
            return Box::new(EmbeddedSource);
        }
        match &self.csv_path {
            Some(path) => Box::new(FallbackSource::new(FileSource::new(path), EmbeddedSource)),
            None => Box::new(FallbackSource::new(
                SheetSource::new(self.sheet_url.clone()),
                EmbeddedSource,
            )),
        }
    }
}

/// Result of one ingestion + validation cycle.
#[derive(Debug)]
pub struct RosterCycle {
    /// Load status shown to the user (source used, fallback reason).
    pub status: String,
    pub validation: Result<ValidatedRoster, ValidationError>,
}

/// Text returned for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    /// True when the caller should stop reading commands.
    pub exit: bool,
}

impl Response {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }
}

pub struct Session {
    source: Box<dyn RosterSource>,
    optimize_count: usize,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_source(config.build_source(), config.optimize_count)
    }

    pub fn with_source(source: Box<dyn RosterSource>, optimize_count: usize) -> Self {
        Self {
            source,
            optimize_count,
        }
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Loads and validates the roster.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] only when no source could be read; validation
    /// failures are reported inside [`RosterCycle::validation`].
    pub fn load_roster(&self) -> Result<RosterCycle, IngestError> {
        let loaded = self.source.load()?;
        let status = loaded.status_message();
        info!(origin = %loaded.origin, rows = loaded.table.rows.len(), "roster loaded");
        Ok(RosterCycle {
            status,
            validation: validate_roster(&loaded.table),
        })
    }

    /// Executes one menu token.
    ///
    /// # Errors
    ///
    /// Propagates [`IngestError`] when both the primary source and the
    /// fallback fail; every other problem is part of the response text.
    pub fn execute(&self, input: &str) -> Result<Response, IngestError> {
        let command = Command::parse(input);
        let span = info_span!("command", ?command);
        let _guard = span.enter();
        match command {
            Command::Exit => Ok(Response {
                text: FAREWELL_MESSAGE.to_string(),
                exit: true,
            }),
            Command::Diagnostic => Ok(Response::text(hidden_message())),
            Command::Invalid(_) => Ok(Response::text(INVALID_OPTION_MESSAGE)),
            Command::Analytic(analytic) => {
                let cycle = self.load_roster()?;
                let roster = match cycle.validation {
                    Ok(roster) => roster,
                    Err(error) => {
                        return Ok(Response::text(format!("Error validating data: {error}")));
                    }
                };
                debug!(records = roster.snapshot.len(), "running analytic");
                let result = analytic.run(&roster.snapshot, self.optimize_count);
                if roster.warnings.is_empty() {
                    Ok(Response::text(result))
                } else {
                    Ok(Response::text(format!("{}\n\n{result}", roster.message())))
                }
            }
        }
    }
}
