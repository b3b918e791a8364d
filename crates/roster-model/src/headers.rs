//! Column names every roster source must declare.

pub const NAME: &str = "name";
pub const DEPARTMENT: &str = "department";
pub const SALARY: &str = "salary";
pub const EXPERIENCE_YEARS: &str = "experience_years";
pub const EMPLOYMENT_STATUS: &str = "employment_status";

/// Required headers, in the order they are reported to the user.
pub const REQUIRED_HEADERS: [&str; 5] = [
    NAME,
    DEPARTMENT,
    SALARY,
    EXPERIENCE_YEARS,
    EMPLOYMENT_STATUS,
];

/// Returns the required headers absent from `headers` (case-sensitive).
pub fn missing_headers(headers: &[String]) -> Vec<&'static str> {
    REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|header| header == required))
        .collect()
}
