#![allow(dead_code)]

use roster_analytics::DEFAULT_OPTIMIZE_COUNT;
use roster_cli::session::Session;
use roster_ingest::{EmbeddedSource, IngestError, LoadedTable, RosterSource, read_csv_str};

/// CSV text held in memory, parsed on every load.
pub struct InlineSource(pub &'static str);

impl RosterSource for InlineSource {
    fn describe(&self) -> String {
        "inline csv".to_string()
    }

    fn load(&self) -> Result<LoadedTable, IngestError> {
        let table = read_csv_str(self.0, "inline csv")?;
        Ok(LoadedTable::new(table, self.describe()))
    }
}

pub fn embedded_session() -> Session {
    Session::with_source(Box::new(EmbeddedSource), DEFAULT_OPTIMIZE_COUNT)
}

pub fn inline_session(csv: &'static str) -> Session {
    Session::with_source(Box::new(InlineSource(csv)), DEFAULT_OPTIMIZE_COUNT)
}
