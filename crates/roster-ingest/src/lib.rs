//! Roster ingestion.
//!
//! Every source produces the same [`RawTable`](roster_model::RawTable) shape,
//! so validation never needs to know whether rows came from the network, a
//! local file or the embedded dataset.

pub mod csv_table;
pub mod embedded;
pub mod error;
pub mod sheet;
pub mod source;

pub use csv_table::{read_csv_path, read_csv_reader, read_csv_str};
pub use embedded::{EMBEDDED_ROSTER_CSV, EmbeddedSource};
pub use error::IngestError;
pub use sheet::{DEFAULT_SHEET_URL, SheetSource, sheet_export_url};
pub use source::{FallbackSource, FileSource, LoadedTable, RosterSource};
