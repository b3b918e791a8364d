use tracing::{debug, info, info_span, trace, warn};

use roster_model::{
    REQUIRED_HEADERS, RawTable, RosterSnapshot, RowRejection, ValidationError, missing_headers,
};

use crate::normalize::normalize_row;

/// Status reported when every active row was accepted.
pub const READY_MESSAGE: &str = "Data validated and ready for analysis.";

/// Outcome of a successful validation cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRoster {
    pub snapshot: RosterSnapshot,
    pub warnings: Vec<RowRejection>,
}

impl ValidatedRoster {
    /// The ready message, or one warning line per rejected row.
    pub fn message(&self) -> String {
        if self.warnings.is_empty() {
            READY_MESSAGE.to_string()
        } else {
            self.warnings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Validates a raw table against the header contract and normalizes its rows.
///
/// # Errors
///
/// - [`ValidationError::MissingHeaders`] before any row is read.
/// - [`ValidationError::EmptySource`] when the table has no data rows.
/// - [`ValidationError::NoActiveRecords`] when rows exist but none survive.
pub fn validate_roster(table: &RawTable) -> Result<ValidatedRoster, ValidationError> {
    let span = info_span!("validate", rows = table.rows.len());
    let _guard = span.enter();

    let missing = missing_headers(&table.headers);
    if !missing.is_empty() {
        warn!(?missing, "required headers missing");
        return Err(ValidationError::MissingHeaders {
            expected: REQUIRED_HEADERS.iter().map(ToString::to_string).collect(),
            found: table.headers.clone(),
        });
    }
    if table.rows.is_empty() {
        return Err(ValidationError::EmptySource);
    }

    let mut records = Vec::new();
    let mut warnings = Vec::new();
    let mut skipped = 0usize;
    for (index, row) in table.rows.iter().enumerate() {
        match normalize_row(row) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {
                skipped += 1;
                debug!(line = index + 2, "row not active; skipped");
            }
            Err(reason) => {
                warn!(line = index + 2, kind = reason.kind(), "row rejected");
                trace!(line = index + 2, %reason, "rejection detail");
                warnings.push(RowRejection::at_index(index, row.clone(), reason));
            }
        }
    }

    if records.is_empty() {
        return Err(ValidationError::NoActiveRecords {
            rows: table.rows.len(),
            rejected: warnings.len(),
        });
    }
    info!(
        accepted = records.len(),
        inactive = skipped,
        rejected = warnings.len(),
        "roster validated"
    );
    Ok(ValidatedRoster {
        snapshot: RosterSnapshot::new(records),
        warnings,
    })
}
