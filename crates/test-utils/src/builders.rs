#![allow(dead_code)]

use taskorder::config::{ConfigSection, RawDeadline, RawTask, RawTaskFile, TaskFile};
use taskorder::dag::{build_graph, Task, TaskGraph, TaskId};
use taskorder::types::{DuplicateIdPolicy, TieBreak};

/// Builder for a list of [`Task`]s to simplify test setup.
#[derive(Default)]
pub struct TaskSetBuilder {
    tasks: Vec<Task>,
}

impl TaskSetBuilder {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Shorthand: task `id` with `priority` and dependencies.
    pub fn task(self, id: TaskId, priority: i64, deps: &[TaskId]) -> Self {
        self.with_task(
            TaskBuilder::new(id)
                .priority(priority)
                .depends_on_all(deps)
                .build(),
        )
    }

    pub fn build(self) -> Vec<Task> {
        self.tasks
    }

    /// Build a graph with last-write-wins duplicate handling.
    pub fn graph(self) -> TaskGraph {
        build_graph(self.tasks).expect("last-write-wins never rejects")
    }
}

/// Builder for a single [`Task`].
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: TaskId) -> Self {
        Self {
            task: Task::new(id, format!("task {id}")),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.task = self.task.with_priority(priority);
        self
    }

    pub fn deadline(mut self, secs: i64) -> Self {
        self.task = self.task.with_deadline(secs);
        self
    }

    pub fn depends_on(mut self, dep: TaskId) -> Self {
        self.task = self.task.depends_on(dep);
        self
    }

    pub fn depends_on_all(mut self, deps: &[TaskId]) -> Self {
        self.task = self.task.depends_on_all(deps.iter().copied());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for a validated [`TaskFile`], going through the same
/// `TryFrom<RawTaskFile>` path as the loader.
pub struct TaskFileBuilder {
    raw: RawTaskFile,
}

impl TaskFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawTaskFile {
                config: ConfigSection::default(),
                task: Vec::new(),
            },
        }
    }

    pub fn duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.raw.config.duplicate_ids = policy;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.raw.config.tie_break = tie_break;
        self
    }

    pub fn with_task(mut self, id: TaskId, priority: i64, deadline: Option<&str>, deps: &[TaskId]) -> Self {
        self.raw.task.push(RawTask {
            id,
            title: format!("task {id}"),
            priority,
            deadline: deadline.map(|d| RawDeadline::Text(d.to_string())),
            depends_on: deps.to_vec(),
        });
        self
    }

    pub fn build(self) -> TaskFile {
        TaskFile::try_from(self.raw).expect("Failed to build valid task file from builder")
    }
}

impl Default for TaskFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
