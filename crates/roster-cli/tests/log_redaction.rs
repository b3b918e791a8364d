//! Warn-level logs never carry cell values from rejected rows.
//!
//! Installs the global subscriber, so this file holds a single test.

mod common;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use roster_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use tracing::level_filters::LevelFilter;

use common::inline_session;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8(bytes).expect("utf-8 logs")
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn rejected_salary_is_not_logged_at_warn() {
    let captured = CapturedLogs::default();
    let mut config = LogConfig::default()
        .with_level(LevelFilter::WARN)
        .with_format(LogFormat::Compact);
    config.use_env_filter = false;
    config.with_ansi = false;
    let writer = captured.clone();
    init_logging_with_writer(&config, move || writer.clone());

    let session = inline_session(
        "name,department,salary,experience_years,employment_status\n\
         Bia,IT,1000,2,Active\n\
         Caio,IT,-7350.25,1,Active\n",
    );
    let response = session.execute("2").expect("source readable");
    assert!(response.text.contains("-7350.25"), "user still sees the warning");

    let logs = captured.contents();
    assert!(logs.contains("row rejected"), "{logs}");
    assert!(logs.contains("salary_out_of_range"), "{logs}");
    assert!(!logs.contains("7350.25"), "{logs}");
    assert!(!logs.contains("Caio"), "{logs}");
}
