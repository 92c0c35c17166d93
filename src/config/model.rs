// src/config/model.rs

use serde::Deserialize;

use crate::dag::{Task, TaskId};
use crate::types::{DuplicateIdPolicy, TieBreak};

/// Task file exactly as read from disk, before field-level validation.
///
/// TOML form:
///
/// ```toml
/// [config]
/// duplicate_ids = "last-write-wins"
/// tie_break = "id"
///
/// [[task]]
/// id = 1
/// title = "Write report"
/// priority = 5
/// deadline = "2025-03-01T12:00:00Z"
/// depends_on = [2]
/// ```
///
/// JSON form mirrors a schedule request body:
/// `{"tasks": [{"id": 1, "title": "Write report", "depends_on": []}]}`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTaskFile {
    /// Ordering options from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All `[[task]]` entries (`"tasks"` in JSON), in input order.
    #[serde(default, alias = "tasks")]
    pub task: Vec<RawTask>,
}

/// `[config]` section.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigSection {
    /// `"last-write-wins"` (default) or `"reject"`.
    #[serde(default)]
    pub duplicate_ids: DuplicateIdPolicy,

    /// `"id"` (default) or `"insertion"`.
    #[serde(default)]
    pub tie_break: TieBreak,
}

/// One `[[task]]` entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawTask {
    pub id: TaskId,

    #[serde(default)]
    pub title: String,

    /// Higher is more important.
    #[serde(default)]
    pub priority: i64,

    /// Epoch seconds, or a date/time string; see `config::validate`.
    #[serde(default)]
    pub deadline: Option<RawDeadline>,

    #[serde(default)]
    pub depends_on: Vec<TaskId>,
}

/// Deadline as written in the file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawDeadline {
    Epoch(i64),
    Text(String),
}

/// A task file whose fields have been validated and converted.
///
/// Only constructed through `TryFrom<RawTaskFile>`.
#[derive(Debug, Clone)]
pub struct TaskFile {
    pub config: ConfigSection,
    pub tasks: Vec<Task>,
}

impl TaskFile {
    pub(crate) fn new_unchecked(config: ConfigSection, tasks: Vec<Task>) -> Self {
        Self { config, tasks }
    }
}
