use roster_model::{
    DEPARTMENT, EMPLOYMENT_STATUS, EXPERIENCE_YEARS, EmployeeRecord, NAME, RawRow,
    RejectionReason, SALARY,
};

/// Lower-cased employment status of rows that enter the canonical set.
pub const ACTIVE_STATUS: &str = "active";

/// Parses a salary cell, accepting a decimal comma.
///
/// Every `,` becomes `.` before conversion, so `"5500,50"` reads as 5500.5.
/// Negative, NaN and infinite amounts are rejected.
pub fn parse_salary(raw: &str) -> Result<f64, RejectionReason> {
    let normalized = raw.trim().replace(',', ".");
    let salary = normalized
        .parse::<f64>()
        .map_err(|source| RejectionReason::InvalidSalary {
            value: raw.to_string(),
            source,
        })?;
    if !salary.is_finite() || salary < 0.0 {
        return Err(RejectionReason::SalaryOutOfRange {
            value: raw.to_string(),
        });
    }
    // "-0" parses to negative zero
    Ok(salary.abs())
}

/// Parses whole years of experience; negative values clamp to zero.
pub fn parse_experience(raw: &str) -> Result<u64, RejectionReason> {
    let years = raw
        .trim()
        .parse::<i64>()
        .map_err(|source| RejectionReason::InvalidExperience {
            value: raw.to_string(),
            source,
        })?;
    Ok(years.max(0).unsigned_abs())
}

/// Normalizes one raw row.
///
/// Returns `Ok(None)` for rows whose status is not active; those are not
/// considered at all. Active rows either become a record or a rejection.
pub fn normalize_row(row: &RawRow) -> Result<Option<EmployeeRecord>, RejectionReason> {
    let status = row.get(EMPLOYMENT_STATUS).unwrap_or_default();
    if status.to_lowercase() != ACTIVE_STATUS {
        return Ok(None);
    }
    let salary = parse_salary(row.get(SALARY).unwrap_or_default())?;
    let experience_years = parse_experience(row.get(EXPERIENCE_YEARS).unwrap_or_default())?;
    Ok(Some(EmployeeRecord {
        name: row.get(NAME).unwrap_or_default().to_string(),
        department: row.get(DEPARTMENT).unwrap_or_default().to_string(),
        salary,
        experience_years,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str, salary: &str, experience: &str) -> RawRow {
        [
            (NAME, "Ana"),
            (DEPARTMENT, "TI"),
            (SALARY, salary),
            (EXPERIENCE_YEARS, experience),
            (EMPLOYMENT_STATUS, status),
            ("city", "Recife"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn decimal_comma_salary() {
        assert_eq!(parse_salary("5500,50"), Ok(5500.5));
        assert_eq!(parse_salary(" 4200 "), Ok(4200.0));
    }

    #[test]
    fn negative_experience_clamps() {
        assert_eq!(parse_experience("-4"), Ok(0));
        assert_eq!(parse_experience("7"), Ok(7));
    }

    #[test]
    fn fractional_experience_is_rejected() {
        assert!(matches!(
            parse_experience("2.5"),
            Err(RejectionReason::InvalidExperience { .. })
        ));
    }

    #[test]
    fn out_of_range_salaries() {
        for raw in ["-1", "NaN", "inf"] {
            assert_eq!(
                parse_salary(raw),
                Err(RejectionReason::SalaryOutOfRange {
                    value: raw.to_string()
                })
            );
        }
    }

    #[test]
    fn inactive_rows_are_skipped_before_parsing() {
        assert_eq!(normalize_row(&row("Inactive", "abc", "x")), Ok(None));
        assert_eq!(normalize_row(&row(" active", "1", "1")), Ok(None));
    }

    #[test]
    fn status_match_ignores_case() {
        let record = normalize_row(&row("ACTIVE", "5500", "3"))
            .expect("valid row")
            .expect("active row");
        assert_eq!(record.name, "Ana");
        assert_eq!(record.department, "TI");
        assert_eq!(record.salary, 5500.0);
        assert_eq!(record.experience_years, 3);
    }
}
