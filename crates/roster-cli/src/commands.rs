use std::io;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_cli::menu::run_menu;
use roster_cli::session::Session;

use crate::cli::InspectFormatArg;
use crate::summary::{rejection_table, roster_table};

pub fn run_interactive(session: &Session) -> Result<()> {
    let span = info_span!("menu", source = %session.source_description());
    let _guard = span.enter();
    let stdin = io::stdin();
    run_menu(session, stdin.lock(), io::stdout())
}

pub fn run_once(session: &Session, token: &str) -> Result<()> {
    let response = session
        .execute(token)
        .context("load roster from every configured source")?;
    println!("{}", response.text);
    Ok(())
}

pub fn run_inspect(session: &Session, format: InspectFormatArg) -> Result<()> {
    let cycle = session
        .load_roster()
        .context("load roster from every configured source")?;
    let roster = match cycle.validation {
        Ok(roster) => roster,
        Err(error) => {
            println!("{}", cycle.status);
            println!("Error validating data: {error}");
            return Ok(());
        }
    };
    info!(
        records = roster.snapshot.len(),
        rejected = roster.warnings.len(),
        "roster inspected"
    );
    match format {
        InspectFormatArg::Json => {
            let json =
                serde_json::to_string_pretty(&roster.snapshot).context("serialize roster")?;
            println!("{json}");
        }
        InspectFormatArg::Table => {
            println!("{}", cycle.status);
            println!("{}", roster_table(roster.snapshot.records()));
            if !roster.warnings.is_empty() {
                println!();
                println!("Rejected rows:");
                println!("{}", rejection_table(&roster.warnings));
            }
            println!("{}", roster.message());
        }
    }
    Ok(())
}
