// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::{DuplicateIdPolicy, OutputFormat, TieBreak};

/// Command-line arguments for `taskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskorder",
    version,
    about = "Compute an execution order for tasks with priorities, deadlines and dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task file (TOML, or JSON when the name ends in `.json`).
    #[arg(long, value_name = "PATH", default_value = "Tasks.toml")]
    pub tasks: String,

    /// Output format for the schedule.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Duplicate id handling; overrides `[config].duplicate_ids`.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub duplicate_ids: Option<DuplicateIdPolicy>,

    /// Final tie-break rule; overrides `[config].tie_break`.
    #[arg(long, value_enum, value_name = "RULE")]
    pub tie_break: Option<TieBreak>,

    /// Validate the task file and report cycles and missing dependencies
    /// instead of printing an order.
    #[arg(long)]
    pub check: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
