// src/config/validate.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::model::{RawDeadline, RawTask, RawTaskFile, TaskFile};
use crate::dag::Task;
use crate::errors::{Result, TaskOrderError};

/// Accepted naive date-time layouts, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl TryFrom<RawTaskFile> for TaskFile {
    type Error = TaskOrderError;

    fn try_from(raw: RawTaskFile) -> std::result::Result<Self, Self::Error> {
        let tasks = raw
            .task
            .iter()
            .map(validate_task)
            .collect::<Result<Vec<_>>>()?;
        Ok(TaskFile::new_unchecked(raw.config, tasks))
    }
}

fn validate_task(raw: &RawTask) -> Result<Task> {
    let deadline = match raw.deadline {
        Some(ref d) => Some(parse_deadline(d).map_err(|msg| {
            TaskOrderError::ConfigError(format!("task {} has {}", raw.id, msg))
        })?),
        None => None,
    };

    Ok(Task {
        id: raw.id,
        title: raw.title.clone(),
        priority: raw.priority,
        deadline,
        depends_on: raw.depends_on.clone(),
    })
}

/// Convert a deadline to seconds since the Unix epoch.
///
/// Accepts:
/// - an integer (already epoch seconds), also inside a string
/// - RFC 3339, e.g. `2025-03-01T12:00:00+02:00`
/// - a naive date-time, e.g. `2025-03-01T12:00:00` (UTC)
/// - a bare date, e.g. `2025-03-01` (midnight UTC)
pub fn parse_deadline(raw: &RawDeadline) -> std::result::Result<i64, String> {
    let text = match raw {
        RawDeadline::Epoch(secs) => return Ok(*secs),
        RawDeadline::Text(s) => s.trim(),
    };

    if let Ok(secs) = text.parse::<i64>() {
        return Ok(secs);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.timestamp());
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Ok(dt.and_utc().timestamp());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc().timestamp());
        }
    }

    Err(format!(
        "invalid deadline '{text}' (expected epoch seconds, RFC 3339, or YYYY-MM-DD)"
    ))
}
