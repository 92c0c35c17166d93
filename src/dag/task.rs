// src/dag/task.rs

//! Input task records.

use serde::Serialize;

/// Identifier of a task within a single scheduling request.
pub type TaskId = i64;

/// Immutable task record as handed to [`crate::dag::build_graph`].
///
/// Only `priority`, `deadline` and `depends_on` influence ordering; `title`
/// is carried along for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Higher is more important.
    pub priority: i64,
    /// Seconds since the Unix epoch; `None` sorts after every real deadline.
    pub deadline: Option<i64>,
    /// Tasks that must be ordered before this one.
    ///
    /// Treated as a set: repeated ids are collapsed when the graph is built.
    /// May name ids that are not part of the request.
    pub depends_on: Vec<TaskId>,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            priority: 0,
            deadline: None,
            depends_on: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn depends_on(mut self, dep: TaskId) -> Self {
        self.depends_on.push(dep);
        self
    }

    pub fn depends_on_all(mut self, deps: impl IntoIterator<Item = TaskId>) -> Self {
        self.depends_on.extend(deps);
        self
    }
}
