pub mod employee;
pub mod error;
pub mod headers;
pub mod raw;

pub use employee::{EmployeeRecord, RosterSnapshot};
pub use error::{RejectionReason, RowRejection, ValidationError};
pub use headers::{
    DEPARTMENT, EMPLOYMENT_STATUS, EXPERIENCE_YEARS, NAME, REQUIRED_HEADERS, SALARY,
    missing_headers,
};
pub use raw::{RawRow, RawTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes() {
        let snapshot = RosterSnapshot::new(vec![EmployeeRecord {
            name: "Ana".to_string(),
            department: "TI".to_string(),
            salary: 5500.0,
            experience_years: 3,
        }]);
        let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
        let round: RosterSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
        assert_eq!(round, snapshot);
    }
}
