use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while obtaining raw roster rows.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The configured URL is not a Google Sheets document link.
    #[error("invalid Google Sheets URL: {0}")]
    InvalidSheetUrl(String),

    /// Connection, TLS or HTTP status failure.
    #[error("network error while fetching {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse CSV from {origin}: {source}")]
    Csv { origin: String, source: csv::Error },

    /// Both the primary source and its fallback failed.
    #[error("all roster sources failed: primary ({primary}); fallback ({fallback})")]
    AllSourcesFailed {
        primary: Box<IngestError>,
        fallback: Box<IngestError>,
    },
}
