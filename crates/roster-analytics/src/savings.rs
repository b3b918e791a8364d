//! Savings projection.
//!
//! The least efficient employees (highest cost per experience year) are
//! brought down to the mean efficiency of all qualifying records; the
//! difference to their current cost is the projected saving.

use std::fmt;

use roster_model::{EmployeeRecord, RosterSnapshot};

use crate::cost::{cost_per_experience_year, is_degenerate, total_cost};
use crate::format::{Currency, write_lines};

/// How many of the least efficient employees are projected by default.
pub const DEFAULT_OPTIMIZE_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum SavingsOutcome {
    /// Efficiency already at or below the mean.
    AlreadyEfficient { name: String, mean_efficiency: f64 },
    Savings {
        name: String,
        department: String,
        current_cost: f64,
        target_cost: f64,
        savings: f64,
    },
    /// Above the mean, yet the target cost does not undercut the current one.
    NoSavings { name: String },
}

impl fmt::Display for SavingsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyEfficient {
                name,
                mean_efficiency,
            } => write!(
                f,
                "- {name} is already more efficient than the average ({mean_efficiency:.2} R$/year), \
                 no projected savings in this scenario."
            ),
            Self::Savings {
                name,
                department,
                current_cost,
                target_cost,
                savings,
            } => write!(
                f,
                "- {name} (Dept: {department}): current cost {}, target cost {}, savings {}",
                Currency(*current_cost),
                Currency(*target_cost),
                Currency(*savings)
            ),
            Self::NoSavings { name } => write!(
                f,
                "- {name} generates no savings in this scenario \
                 (target cost greater than or equal to current cost)."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsProjection {
    /// Mean cost per experience year over every qualifying record.
    pub mean_efficiency: f64,
    /// Sum of the positive per-employee savings.
    pub total_savings: f64,
    /// One outcome per selected employee, least efficient first.
    pub outcomes: Vec<SavingsOutcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SavingsReport {
    NoEmployees,
    NoQualifying,
    /// The top-`count` selection was empty.
    NothingSelected,
    Projected(SavingsProjection),
}

struct Candidate<'a> {
    record: &'a EmployeeRecord,
    efficiency: f64,
}

/// Projects savings for the `count` least efficient qualifying records.
pub fn project_savings(snapshot: &RosterSnapshot, count: usize) -> SavingsReport {
    if snapshot.is_empty() {
        return SavingsReport::NoEmployees;
    }
    let mut candidates: Vec<Candidate<'_>> = snapshot
        .iter()
        .filter(|record| !is_degenerate(record))
        .map(|record| Candidate {
            record,
            efficiency: cost_per_experience_year(record.salary, record.experience_years),
        })
        .collect();
    if candidates.is_empty() {
        return SavingsReport::NoQualifying;
    }
    let mean_efficiency = candidates
        .iter()
        .map(|candidate| candidate.efficiency)
        .sum::<f64>()
        / candidates.len() as f64;

    candidates.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    candidates.truncate(count);
    if candidates.is_empty() {
        return SavingsReport::NothingSelected;
    }

    let mut total_savings = 0.0;
    let outcomes = candidates
        .iter()
        .map(|candidate| {
            let record = candidate.record;
            if candidate.efficiency <= mean_efficiency {
                return SavingsOutcome::AlreadyEfficient {
                    name: record.name.clone(),
                    mean_efficiency,
                };
            }
            let current_cost = total_cost(record.salary);
            let target_cost = mean_efficiency * record.experience_years as f64;
            let savings = current_cost - target_cost;
            if savings > 0.0 {
                total_savings += savings;
                SavingsOutcome::Savings {
                    name: record.name.clone(),
                    department: record.department.clone(),
                    current_cost,
                    target_cost,
                    savings,
                }
            } else {
                SavingsOutcome::NoSavings {
                    name: record.name.clone(),
                }
            }
        })
        .collect();

    SavingsReport::Projected(SavingsProjection {
        mean_efficiency,
        total_savings,
        outcomes,
    })
}

const CANNOT_PROJECT: &str = "Could not project significant savings in this optimization scenario.";

impl fmt::Display for SavingsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let projection = match self {
            Self::NoEmployees => return f.write_str("No active employees to project savings."),
            Self::NoQualifying => return f.write_str(CANNOT_PROJECT),
            Self::NothingSelected => {
                return f.write_str(
                    "Could not identify employees to optimize with the current criteria.",
                );
            }
            Self::Projected(projection) => projection,
        };
        if projection.total_savings == 0.0 {
            if projection.outcomes.is_empty() {
                return f.write_str(CANNOT_PROJECT);
            }
            return write_lines(f, &projection.outcomes);
        }
        write!(
            f,
            "Total projected savings: {}\n\nOptimization details:\n",
            Currency(projection.total_savings)
        )?;
        write_lines(f, &projection.outcomes)
    }
}
