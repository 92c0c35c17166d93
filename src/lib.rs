// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::{ConfigSection, TaskFile};
use crate::dag::{GraphDiagnostics, ScheduleResult, Scheduler, TaskGraph};
use crate::report::ScheduleResponse;
use crate::types::OutputFormat;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - task file loading and field validation
/// - graph construction under the duplicate-id policy
/// - scheduling
/// - rendering to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let tasks_path = PathBuf::from(&args.tasks);
    let file = load_and_validate(&tasks_path)?;
    let options = effective_options(file.config, &args);

    info!(
        path = %tasks_path.display(),
        tasks = file.tasks.len(),
        duplicate_ids = ?options.duplicate_ids,
        tie_break = %options.tie_break,
        "loaded task file"
    );

    if args.check {
        let graph = TaskGraph::build(file.tasks, options.duplicate_ids)?;
        let diag = GraphDiagnostics::analyze(&graph);
        print!("{}", report::diagnostics_text(&graph, &diag));
        return Ok(());
    }

    let (graph, result) = schedule_file(file, options)?;
    let response = ScheduleResponse::new(&graph, &result);

    match args.format {
        OutputFormat::Json => println!("{}", response.to_json()?),
        OutputFormat::Text => print!("{}", response.to_text(&graph)),
    }

    debug!("schedule printed");
    Ok(())
}

/// Build the graph for a validated task file and order it.
///
/// When the order has a fallback tail, the graph diagnostics are logged so
/// the cause (cycle or missing dependency) is visible.
pub fn schedule_file(
    file: TaskFile,
    options: ConfigSection,
) -> crate::errors::Result<(TaskGraph, ScheduleResult)> {
    let graph = TaskGraph::build(file.tasks, options.duplicate_ids)?;
    let result = Scheduler::new(options.tie_break).run(&graph);

    if result.used_fallback() {
        let diag = GraphDiagnostics::analyze(&graph);
        warn!(
            cycles = ?diag.cycles,
            dangling = ?diag.dangling,
            fallback = ?result.fallback_ids(),
            "schedule contains tasks ordered by priority only"
        );
    }

    Ok((graph, result))
}

/// `[config]` values with CLI overrides applied.
fn effective_options(mut cfg: ConfigSection, args: &CliArgs) -> ConfigSection {
    if let Some(policy) = args.duplicate_ids {
        cfg.duplicate_ids = policy;
    }
    if let Some(tie_break) = args.tie_break {
        cfg.tie_break = tie_break;
    }
    cfg
}
