//! Department grouping and the most/least costly selection.

use std::collections::BTreeMap;
use std::fmt;

use roster_model::{EmployeeRecord, RosterSnapshot};

use crate::cost::total_cost;
use crate::format::{Currency, write_lines};

/// Departments with fewer active members than this get an advisory.
pub const MIN_DEPARTMENT_MEMBERS: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DepartmentTotals {
    pub total_cost: f64,
    pub members: usize,
}

/// Total cost and member count per department, ordered by department name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentCostSummary {
    departments: BTreeMap<String, DepartmentTotals>,
}

impl DepartmentCostSummary {
    pub fn from_records(records: &[EmployeeRecord]) -> Self {
        let mut departments: BTreeMap<String, DepartmentTotals> = BTreeMap::new();
        for record in records {
            let entry = departments.entry(record.department.clone()).or_default();
            entry.total_cost += total_cost(record.salary);
            entry.members += 1;
        }
        Self { departments }
    }

    pub fn get(&self, department: &str) -> Option<DepartmentTotals> {
        self.departments.get(department).copied()
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DepartmentTotals)> {
        self.departments
            .iter()
            .map(|(name, totals)| (name.as_str(), *totals))
    }

    /// Departments below [`MIN_DEPARTMENT_MEMBERS`].
    pub fn understaffed(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, totals)| totals.members < MIN_DEPARTMENT_MEMBERS)
            .map(|(name, _)| name)
    }

    /// Highest total cost; ties go to the department that sorts first.
    pub fn most_costly(&self) -> Option<(&str, f64)> {
        self.select(|candidate, best| candidate > best)
    }

    /// Lowest total cost; ties go to the department that sorts first.
    pub fn least_costly(&self) -> Option<(&str, f64)> {
        self.select(|candidate, best| candidate < best)
    }

    fn select(&self, replaces: impl Fn(f64, f64) -> bool) -> Option<(&str, f64)> {
        let mut selected: Option<(&str, f64)> = None;
        for (name, totals) in self.iter() {
            match selected {
                Some((_, best)) if !replaces(totals.total_cost, best) => {}
                _ => selected = Some((name, totals.total_cost)),
            }
        }
        selected
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DepartmentCostReport {
    NoEmployees,
    Summary(DepartmentCostSummary),
}

/// Groups the snapshot by department.
pub fn department_costs(snapshot: &RosterSnapshot) -> DepartmentCostReport {
    if snapshot.is_empty() {
        return DepartmentCostReport::NoEmployees;
    }
    DepartmentCostReport::Summary(DepartmentCostSummary::from_records(snapshot))
}

impl fmt::Display for DepartmentCostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = match self {
            Self::NoEmployees => {
                return f.write_str(
                    "No active employees found to calculate the cost by department.",
                );
            }
            Self::Summary(summary) => summary,
        };
        let mut lines = vec!["Total cost by department:".to_string()];
        lines.extend(summary.understaffed().map(|name| {
            format!(
                "Warning: department '{name}' has fewer than {MIN_DEPARTMENT_MEMBERS} active employees."
            )
        }));
        if summary.is_empty() {
            lines.push("No costs calculated. Check the employee data.".to_string());
        } else {
            lines.extend(
                summary
                    .iter()
                    .map(|(name, totals)| format!("{name}: {}", Currency(totals.total_cost))),
            );
        }
        write_lines(f, lines)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CostExtremesReport {
    NoEmployees,
    NoDepartments,
    Extremes {
        most: (String, f64),
        least: (String, f64),
    },
}

/// Most and least costly departments by aggregated total cost.
pub fn cost_extremes(snapshot: &RosterSnapshot) -> CostExtremesReport {
    if snapshot.is_empty() {
        return CostExtremesReport::NoEmployees;
    }
    let summary = DepartmentCostSummary::from_records(snapshot);
    match (summary.most_costly(), summary.least_costly()) {
        (Some((most, most_cost)), Some((least, least_cost))) => CostExtremesReport::Extremes {
            most: (most.to_string(), most_cost),
            least: (least.to_string(), least_cost),
        },
        _ => CostExtremesReport::NoDepartments,
    }
}

impl fmt::Display for CostExtremesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEmployees => f.write_str(
                "No active employees found to identify the most/least costly department.",
            ),
            Self::NoDepartments => f.write_str(
                "No department costs calculated. Cannot identify the most/least costly department.",
            ),
            Self::Extremes { most, least } => write!(
                f,
                "Most costly department: {}\nLeast costly department: {}",
                most.0, least.0
            ),
        }
    }
}
