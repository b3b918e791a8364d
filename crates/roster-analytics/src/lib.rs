//! Workforce cost analytics.
//!
//! Every operation borrows a [`RosterSnapshot`](roster_model::RosterSnapshot)
//! and returns a report value; the report's `Display` is the text shown to
//! the user. Nothing here keeps state between calls.

pub mod average;
pub mod cost;
pub mod departments;
pub mod efficiency;
pub mod savings;

mod format;

pub use average::{AverageCostReport, average_cost};
pub use cost::{OVERHEAD_FACTOR, cost_per_experience_year, is_degenerate, total_cost};
pub use departments::{
    CostExtremesReport, DepartmentCostReport, DepartmentCostSummary, DepartmentTotals,
    MIN_DEPARTMENT_MEMBERS, cost_extremes, department_costs,
};
pub use efficiency::{
    BestCostBenefitReport, EfficiencyEntry, EfficiencyReport, best_cost_benefit,
    efficiency_entries, efficiency_ranking,
};
pub use savings::{
    DEFAULT_OPTIMIZE_COUNT, SavingsOutcome, SavingsProjection, SavingsReport, project_savings,
};
