//! Cost model shared by every analytic.

use roster_model::EmployeeRecord;

/// Salary multiplier covering the fixed 80% overhead.
pub const OVERHEAD_FACTOR: f64 = 1.8;

/// Salary plus overhead.
pub fn total_cost(salary: f64) -> f64 {
    salary * OVERHEAD_FACTOR
}

/// Total cost spread over the years of experience, never fewer than one.
pub fn cost_per_experience_year(salary: f64, experience_years: u64) -> f64 {
    total_cost(salary) / experience_years.max(1) as f64
}

/// Zero salary with zero experience; such records are left out of
/// efficiency analytics but still count toward cost totals.
pub fn is_degenerate(record: &EmployeeRecord) -> bool {
    record.salary == 0.0 && record.experience_years == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_employee() {
        assert_eq!(format!("{:.2}", total_cost(5500.0)), "9900.00");
        assert_eq!(format!("{:.2}", cost_per_experience_year(5500.0, 3)), "3300.00");
    }

    #[test]
    fn zero_experience_counts_as_one_year() {
        assert_eq!(cost_per_experience_year(1000.0, 0), total_cost(1000.0));
        assert_eq!(cost_per_experience_year(1000.0, 1), total_cost(1000.0));
    }
}
