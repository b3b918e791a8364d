//! Google Sheets CSV export.

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::csv_table::read_csv_str;
use crate::error::IngestError;
use crate::source::{LoadedTable, RosterSource};

/// Sheet queried when no URL is configured.
pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1gIFTAgtLZIPCXqy5CaQxQ8s6MVFH2IGl-uG45N1MFJs/edit?usp=sharing";

const SHEETS_HOST: &str = "docs.google.com";

/// User agent string for export requests.
const USER_AGENT_VALUE: &str = concat!("moneywise/", env!("CARGO_PKG_VERSION"));

/// Converts a sheet link into its CSV export URL.
///
/// The document id is taken from the `/spreadsheets/d/<id>` path and a
/// `#gid=<n>` fragment, when present, selects the tab.
pub fn sheet_export_url(raw: &str) -> Result<String, IngestError> {
    let invalid = || IngestError::InvalidSheetUrl(raw.to_string());
    let parsed = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if parsed.host_str() != Some(SHEETS_HOST) {
        return Err(invalid());
    }
    let segments: Vec<&str> = parsed.path_segments().ok_or_else(invalid)?.collect();
    let id = segments
        .windows(3)
        .find(|window| window[0] == "spreadsheets" && window[1] == "d" && !window[2].is_empty())
        .map(|window| window[2])
        .ok_or_else(invalid)?;
    let gid = parsed.fragment().and_then(|fragment| {
        fragment
            .split('&')
            .find_map(|pair| pair.strip_prefix("gid="))
            .filter(|gid| !gid.is_empty())
    });
    let mut export = format!("https://{SHEETS_HOST}/spreadsheets/d/{id}/export?format=csv");
    if let Some(gid) = gid {
        export.push_str("&gid=");
        export.push_str(gid);
    }
    Ok(export)
}

/// A Google Sheets document fetched over HTTPS on every load.
#[derive(Debug, Clone)]
pub struct SheetSource {
    url: String,
}

impl SheetSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for SheetSource {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_URL)
    }
}

impl RosterSource for SheetSource {
    fn describe(&self) -> String {
        "Google Sheets".to_string()
    }

    fn load(&self) -> Result<LoadedTable, IngestError> {
        let export_url = sheet_export_url(&self.url)?;
        debug!(url = %export_url, "fetching sheet export");
        let http_error = |source: reqwest::Error| IngestError::Http {
            url: export_url.clone(),
            source,
        };
        let client = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(http_error)?;
        let body = client
            .get(&export_url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(http_error)?;
        let table = read_csv_str(&body, &export_url)?;
        Ok(LoadedTable::new(table, self.describe()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_converts() {
        assert_eq!(
            sheet_export_url(DEFAULT_SHEET_URL).unwrap(),
            "https://docs.google.com/spreadsheets/d/1gIFTAgtLZIPCXqy5CaQxQ8s6MVFH2IGl-uG45N1MFJs/export?format=csv"
        );
    }
}
