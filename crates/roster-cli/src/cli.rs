//! CLI argument definitions for MoneyWise.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_analytics::DEFAULT_OPTIMIZE_COUNT;
use roster_cli::session::SessionConfig;
use roster_ingest::DEFAULT_SHEET_URL;

#[derive(Parser)]
#[command(
    name = "moneywise",
    version,
    about = "MoneyWise - employee cost calculator",
    long_about = "Compute labor-cost analytics over an employee roster.\n\n\
                  Reads a published spreadsheet (or a local CSV), falls back to a\n\
                  built-in dataset when the primary source fails, and answers\n\
                  menu commands about department costs, efficiency and savings."
)]
pub struct Cli {
    /// Defaults to the interactive menu.
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive numbered menu on stdin.
    Menu,

    /// Run a single menu command and print its result.
    Run(RunArgs),

    /// Load and validate the roster, then print the accepted records.
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Published Google Sheets URL used as the primary source.
    #[arg(
        long = "sheet-url",
        value_name = "URL",
        default_value = DEFAULT_SHEET_URL,
        global = true
    )]
    pub sheet_url: String,

    /// Local CSV file used as the primary source instead of the sheet.
    #[arg(long = "csv", value_name = "PATH", global = true, conflicts_with = "offline")]
    pub csv: Option<PathBuf>,

    /// Use only the built-in dataset.
    #[arg(long = "offline", global = true)]
    pub offline: bool,

    /// Number of least efficient employees in the savings projection.
    #[arg(long = "top", value_name = "N", default_value_t = DEFAULT_OPTIMIZE_COUNT, global = true)]
    pub top: usize,
}

impl SourceArgs {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            sheet_url: self.sheet_url.clone(),
            csv_path: self.csv.clone(),
            offline: self.offline,
            optimize_count: self.top,
        }
    }
}

#[derive(Args)]
pub struct RunArgs {
    /// Menu number, `99`, or a command phrase such as "best cost-benefit".
    #[arg(value_name = "COMMAND", num_args = 1.., required = true)]
    pub command: Vec<String>,
}

impl RunArgs {
    /// Words joined back into a single token.
    pub fn token(&self) -> String {
        self.command.join(" ")
    }
}

#[derive(Args)]
pub struct InspectArgs {
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: InspectFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InspectFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
