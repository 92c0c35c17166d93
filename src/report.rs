// src/report.rs

//! Presentation of a finished schedule: ids mapped back to task records with
//! their rank, plus a short human-readable reason.

use std::fmt::Write as _;

use chrono::DateTime;
use serde::Serialize;

use crate::dag::{GraphDiagnostics, ScheduleResult, TaskGraph, TaskId};
use crate::errors::Result;

/// Reason reported for every schedule.
pub const BASE_REASON: &str = "priority/deadline/dependency-based ordering";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleItem {
    pub id: TaskId,
    pub title: String,
    /// Rank: 0-based position in the order.
    pub order: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResponse {
    pub order: Vec<ScheduleItem>,
    pub reason: String,
}

impl ScheduleResponse {
    pub fn new(graph: &TaskGraph, result: &ScheduleResult) -> Self {
        let order = result
            .ranked()
            .map(|(rank, id)| ScheduleItem {
                id,
                title: graph.task(id).map(|t| t.title.clone()).unwrap_or_default(),
                order: rank,
            })
            .collect();

        Self {
            order,
            reason: reason_for(result),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One line per task: rank, id, priority, deadline, title.
    pub fn to_text(&self, graph: &TaskGraph) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>4}  {:>6}  {:>8}  {:<20}  title",
            "rank", "id", "priority", "deadline"
        );
        for item in self.order.iter() {
            let (priority, deadline) = graph
                .task(item.id)
                .map(|t| (t.priority, t.deadline))
                .unwrap_or((0, None));
            let _ = writeln!(
                out,
                "{:>4}  {:>6}  {:>8}  {:<20}  {}",
                item.order,
                item.id,
                priority,
                format_deadline(deadline),
                item.title
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "reason: {}", self.reason);
        out
    }
}

fn reason_for(result: &ScheduleResult) -> String {
    let fallback = result.fallback_ids().len();
    if fallback == 0 {
        BASE_REASON.to_string()
    } else {
        format!(
            "{BASE_REASON}; {fallback} task(s) ordered by priority only (cycle or missing dependency)"
        )
    }
}

fn format_deadline(deadline: Option<i64>) -> String {
    match deadline {
        Some(secs) => DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
            .unwrap_or_else(|| secs.to_string()),
        None => "-".to_string(),
    }
}

/// Text summary printed by `--check`.
pub fn diagnostics_text(graph: &TaskGraph, diag: &GraphDiagnostics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "tasks: {}", graph.len());
    let _ = writeln!(
        out,
        "edges: {}",
        graph
            .tasks()
            .map(|t| graph.dependencies_of(t.id).len())
            .sum::<usize>()
    );
    if !graph.overwritten_ids().is_empty() {
        let _ = writeln!(
            out,
            "duplicate ids (last record kept): {:?}",
            graph.overwritten_ids()
        );
    }

    if diag.is_clean() {
        let _ = writeln!(out, "ok: every task can be ordered by its dependencies");
        return out;
    }

    for cycle in diag.cycles.iter() {
        let _ = writeln!(out, "cycle: {cycle:?}");
    }
    for (task, missing) in diag.dangling.iter() {
        let _ = writeln!(
            out,
            "missing dependency: task {task} depends on unknown task {missing}"
        );
    }
    let _ = writeln!(out, "ordered by priority only: {:?}", diag.blocked);
    out
}
