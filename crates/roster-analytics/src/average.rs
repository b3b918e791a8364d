use std::fmt;

use roster_model::RosterSnapshot;

use crate::cost::total_cost;
use crate::format::Currency;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageCostReport {
    NoEmployees,
    Average(f64),
}

/// Mean total cost across every record in the snapshot.
pub fn average_cost(snapshot: &RosterSnapshot) -> AverageCostReport {
    if snapshot.is_empty() {
        return AverageCostReport::NoEmployees;
    }
    let total: f64 = snapshot.iter().map(|record| total_cost(record.salary)).sum();
    AverageCostReport::Average(total / snapshot.len() as f64)
}

impl fmt::Display for AverageCostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEmployees => {
                f.write_str("No active employees found to calculate the average cost.")
            }
            Self::Average(value) => {
                write!(f, "Average cost per active employee: {}", Currency(*value))
            }
        }
    }
}
