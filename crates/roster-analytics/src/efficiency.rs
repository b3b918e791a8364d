//! Cost per experience year: ranking and best cost-benefit.

use std::fmt;

use roster_model::{EmployeeRecord, RosterSnapshot};

use crate::cost::{cost_per_experience_year, is_degenerate};
use crate::format::{Currency, write_lines};

#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyEntry {
    pub name: String,
    pub department: String,
    pub cost_per_experience_year: f64,
}

impl EfficiencyEntry {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            name: record.name.clone(),
            department: record.department.clone(),
            cost_per_experience_year: cost_per_experience_year(
                record.salary,
                record.experience_years,
            ),
        }
    }
}

/// Entries for every qualifying record, in snapshot order.
pub fn efficiency_entries(records: &[EmployeeRecord]) -> Vec<EfficiencyEntry> {
    records
        .iter()
        .filter(|record| !is_degenerate(record))
        .map(EfficiencyEntry::from_record)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum EfficiencyReport {
    NoEmployees,
    /// Ascending by cost per experience year; may be empty.
    Ranking(Vec<EfficiencyEntry>),
}

/// Ranks qualifying records from cheapest to most expensive per year.
///
/// The sort is stable, so equal values keep their snapshot order.
pub fn efficiency_ranking(snapshot: &RosterSnapshot) -> EfficiencyReport {
    if snapshot.is_empty() {
        return EfficiencyReport::NoEmployees;
    }
    let mut entries = efficiency_entries(snapshot);
    entries.sort_by(|a, b| a.cost_per_experience_year.total_cmp(&b.cost_per_experience_year));
    EfficiencyReport::Ranking(entries)
}

impl fmt::Display for EfficiencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = match self {
            Self::NoEmployees => {
                return f.write_str(
                    "No active employees found to calculate efficiency by experience.",
                );
            }
            Self::Ranking(entries) => entries,
        };
        let mut lines =
            vec!["Efficiency per year of experience (cost / year of experience):".to_string()];
        if entries.is_empty() {
            lines.push("No valid data to calculate efficiency.".to_string());
        }
        lines.extend(entries.iter().map(|entry| {
            format!(
                "- {} ({}): {} per year of experience",
                entry.name,
                entry.department,
                Currency(entry.cost_per_experience_year)
            )
        }));
        write_lines(f, lines)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BestCostBenefitReport {
    NoEmployees,
    NoQualifying,
    Best {
        cost_per_experience_year: f64,
        /// Every record tied at the minimum, in snapshot order.
        employees: Vec<EfficiencyEntry>,
    },
}

/// Records with the lowest cost per experience year, ties included.
pub fn best_cost_benefit(snapshot: &RosterSnapshot) -> BestCostBenefitReport {
    if snapshot.is_empty() {
        return BestCostBenefitReport::NoEmployees;
    }
    let mut best = f64::INFINITY;
    let mut employees: Vec<EfficiencyEntry> = Vec::new();
    for entry in efficiency_entries(snapshot) {
        let current = entry.cost_per_experience_year;
        if current < best {
            best = current;
            employees.clear();
            employees.push(entry);
        } else if current == best {
            employees.push(entry);
        }
    }
    if employees.is_empty() {
        return BestCostBenefitReport::NoQualifying;
    }
    BestCostBenefitReport::Best {
        cost_per_experience_year: best,
        employees,
    }
}

impl fmt::Display for BestCostBenefitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEmployees => f.write_str(
                "No active employees found to identify the best cost-benefit.",
            ),
            Self::NoQualifying => f.write_str(
                "Could not identify employees with the best cost-benefit. \
                 Check that salary and experience data are valid.",
            ),
            Self::Best {
                cost_per_experience_year,
                employees,
            } => {
                let header = format!(
                    "Employee(s) with the BEST cost-benefit (cost of {} per year of experience):",
                    Currency(*cost_per_experience_year)
                );
                let members = employees
                    .iter()
                    .map(|entry| format!("- {} (Department: {})", entry.name, entry.department));
                write_lines(f, std::iter::once(header).chain(members))
            }
        }
    }
}
