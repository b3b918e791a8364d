use tracing::debug;

use crate::csv_table::read_csv_str;
use crate::error::IngestError;
use crate::source::{LoadedTable, RosterSource};

/// Dataset used when the primary source cannot be read.
pub const EMBEDDED_ROSTER_CSV: &str = "\
name,age,city,profession,salary,experience_years,education_level,employment_status,hire_date,department
João Silva,28,São Paulo,Developer,5500,3,Bachelor,Active,2021-03-15,IT
Maria Santos,32,Rio de Janeiro,Designer,4200,5,Bachelor,Active,2020-07-22,Marketing
Carlos Oliveira,45,Belo Horizonte,Manager,8500,12,Postgraduate,Active,2018-11-10,Sales
Ana Costa,29,Porto Alegre,Analyst,3800,2,Bachelor,Inactive,2022-01-08,Finance
Pedro Lima,35,Fortaleza,Developer,7200,8,Bachelor,Active,2019-05-18,IT
";

/// The fixed, compiled-in roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl RosterSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded dataset".to_string()
    }

    fn load(&self) -> Result<LoadedTable, IngestError> {
        let table = read_csv_str(EMBEDDED_ROSTER_CSV, "embedded dataset")?;
        debug!(rows = table.rows.len(), "loaded embedded dataset");
        Ok(LoadedTable::new(table, self.describe()))
    }
}
