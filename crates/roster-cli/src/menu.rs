//! Interactive text menu.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::dispatch::Analytic;
use crate::session::Session;

pub const MENU_TITLE: &str = "=== Cost Calculator - MoneyWise ===";
const PROMPT: &str = "Choose an option: ";

/// Writes the numbered menu.
pub fn write_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU_TITLE}")?;
    for analytic in Analytic::ALL {
        writeln!(out, "{}. {}", analytic.number(), analytic.label())?;
    }
    writeln!(out, "0. Exit the program")
}

/// Reads commands from `input` until exit or end of input.
///
/// # Errors
///
/// Fails on I/O errors and when the roster cannot be loaded from any source.
pub fn run_menu<R: BufRead, W: Write>(session: &Session, input: R, mut out: W) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write_menu(&mut out).context("write menu")?;
        write!(out, "{PROMPT}").context("write prompt")?;
        out.flush().context("flush prompt")?;
        let Some(line) = lines.next() else {
            info!("input closed");
            writeln!(out).context("write newline")?;
            return Ok(());
        };
        let line = line.context("read command")?;
        let response = session
            .execute(&line)
            .context("load roster from every configured source")?;
        writeln!(out, "\n{}", response.text).context("write response")?;
        if response.exit {
            return Ok(());
        }
    }
}
