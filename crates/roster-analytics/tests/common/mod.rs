#![allow(dead_code)]

use roster_model::{EmployeeRecord, RosterSnapshot};

pub fn employee(name: &str, department: &str, salary: f64, experience_years: u64) -> EmployeeRecord {
    EmployeeRecord {
        name: name.to_string(),
        department: department.to_string(),
        salary,
        experience_years,
    }
}

/// The four active employees of the embedded dataset.
pub fn sample_roster() -> RosterSnapshot {
    RosterSnapshot::new(vec![
        employee("João Silva", "IT", 5500.0, 3),
        employee("Maria Santos", "Marketing", 4200.0, 5),
        employee("Carlos Oliveira", "Sales", 8500.0, 12),
        employee("Pedro Lima", "IT", 7200.0, 8),
    ])
}
