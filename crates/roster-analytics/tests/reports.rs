//! Rendered reports for the sample roster.

mod common;

use roster_analytics::{
    DEFAULT_OPTIMIZE_COUNT, average_cost, best_cost_benefit, cost_extremes, department_costs,
    efficiency_ranking, project_savings,
};
use roster_model::RosterSnapshot;

use common::sample_roster;

#[test]
fn department_cost_report() {
    insta::assert_snapshot!(department_costs(&sample_roster()).to_string(), @r"
    Total cost by department:
    Warning: department 'Marketing' has fewer than 2 active employees.
    Warning: department 'Sales' has fewer than 2 active employees.
    IT: R$ 22860.00
    Marketing: R$ 7560.00
    Sales: R$ 15300.00
    ");
}

#[test]
fn average_cost_report() {
    insta::assert_snapshot!(
        average_cost(&sample_roster()).to_string(),
        @"Average cost per active employee: R$ 11430.00"
    );
}

#[test]
fn cost_extremes_report() {
    insta::assert_snapshot!(cost_extremes(&sample_roster()).to_string(), @r"
    Most costly department: IT
    Least costly department: Marketing
    ");
}

#[test]
fn efficiency_ranking_report() {
    insta::assert_snapshot!(efficiency_ranking(&sample_roster()).to_string(), @r"
    Efficiency per year of experience (cost / year of experience):
    - Carlos Oliveira (Sales): R$ 1275.00 per year of experience
    - Maria Santos (Marketing): R$ 1512.00 per year of experience
    - Pedro Lima (IT): R$ 1620.00 per year of experience
    - João Silva (IT): R$ 3300.00 per year of experience
    ");
}

#[test]
fn best_cost_benefit_report() {
    insta::assert_snapshot!(best_cost_benefit(&sample_roster()).to_string(), @r"
    Employee(s) with the BEST cost-benefit (cost of R$ 1275.00 per year of experience):
    - Carlos Oliveira (Department: Sales)
    ");
}

#[test]
fn savings_projection_report() {
    insta::assert_snapshot!(
        project_savings(&sample_roster(), DEFAULT_OPTIMIZE_COUNT).to_string(),
        @r"
    Total projected savings: R$ 4119.75

    Optimization details:
    - João Silva (Dept: IT): current cost R$ 9900.00, target cost R$ 5780.25, savings R$ 4119.75
    - Pedro Lima is already more efficient than the average (1926.75 R$/year), no projected savings in this scenario.
    - Maria Santos is already more efficient than the average (1926.75 R$/year), no projected savings in this scenario.
    "
    );
}

#[test]
fn empty_snapshot_reports_nothing_to_compute() {
    let empty = RosterSnapshot::default();
    let rendered = [
        department_costs(&empty).to_string(),
        average_cost(&empty).to_string(),
        cost_extremes(&empty).to_string(),
        efficiency_ranking(&empty).to_string(),
        best_cost_benefit(&empty).to_string(),
        project_savings(&empty, DEFAULT_OPTIMIZE_COUNT).to_string(),
    ];
    for text in rendered {
        assert!(text.starts_with("No active employees"), "{text}");
    }
}
