use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A validated, active employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: String,
    pub department: String,
    /// Normalized monthly base pay, finite and non-negative.
    pub salary: f64,
    pub experience_years: u64,
}

impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): salary {:.2}, {} year(s) of experience",
            self.name, self.department, self.salary, self.experience_years
        )
    }
}

/// Immutable canonical record set produced by one ingestion cycle.
///
/// Analytics borrow a snapshot; a new cycle builds a new value instead of
/// mutating the old one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterSnapshot {
    records: Vec<EmployeeRecord>,
}

impl RosterSnapshot {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }
}

impl Deref for RosterSnapshot {
    type Target = [EmployeeRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<EmployeeRecord>> for RosterSnapshot {
    fn from(records: Vec<EmployeeRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<EmployeeRecord> for RosterSnapshot {
    fn from_iter<I: IntoIterator<Item = EmployeeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
