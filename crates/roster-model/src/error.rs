use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::raw::RawRow;

/// Why a single active row could not become an [`EmployeeRecord`](crate::EmployeeRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("invalid salary {value:?}: {source}")]
    InvalidSalary {
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("salary {value:?} is not a finite, non-negative amount")]
    SalaryOutOfRange { value: String },
    #[error("invalid experience_years {value:?}: {source}")]
    InvalidExperience {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl RejectionReason {
    /// Short label without the offending cell value, safe for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSalary { .. } => "invalid_salary",
            Self::SalaryOutOfRange { .. } => "salary_out_of_range",
            Self::InvalidExperience { .. } => "invalid_experience",
        }
    }
}

/// A dropped row together with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    /// 1-based line in the source; the header occupies line 1.
    pub line: usize,
    pub row: RawRow,
    pub reason: RejectionReason,
}

impl RowRejection {
    /// Builds a rejection for the zero-based data row `index`.
    pub fn at_index(index: usize, row: RawRow, reason: RejectionReason) -> Self {
        Self {
            line: index + 2,
            row,
            reason,
        }
    }
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: line {} has invalid or missing data (ignored): {}. Error: {}",
            self.line, self.row, self.reason
        )
    }
}

/// Failures that abort a validation cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing or incorrect required headers. Expected: {expected:?}, Found: {found:?}")]
    MissingHeaders {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("the source contains a header line but no employee rows")]
    EmptySource,
    #[error(
        "no active and valid employees found after validation ({rows} row(s) read, {rejected} rejected)"
    )]
    NoActiveRecords { rows: usize, rejected: usize },
}
