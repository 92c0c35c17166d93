// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::dag::task::{Task, TaskId};
use crate::errors::ValidationError;
use crate::types::DuplicateIdPolicy;

/// One edge target of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// The dependency is part of the request, stored at `slot`.
    Known { id: TaskId, slot: usize },
    /// The dependency names an id that is not part of the request. It can
    /// never be satisfied.
    Dangling(TaskId),
}

impl Dependency {
    pub fn id(&self) -> TaskId {
        match *self {
            Dependency::Known { id, .. } => id,
            Dependency::Dangling(id) => id,
        }
    }

    pub fn is_dangling(&self) -> bool {
        matches!(self, Dependency::Dangling(_))
    }
}

/// Internal node structure: the task plus its immediate edges.
#[derive(Debug, Clone)]
pub(crate) struct TaskNode {
    pub(crate) task: Task,
    /// Distinct dependencies, in first-seen order.
    pub(crate) deps: Vec<Dependency>,
    /// Slots of the tasks that list this one in `depends_on`.
    pub(crate) dependents: Vec<usize>,
}

/// In-memory task graph for one scheduling request.
///
/// Nodes live in an arena in input order; `index` maps a task id to its
/// slot. The graph is immutable once built: per-run counters are owned by
/// [`crate::dag::ScheduleRun`], so one graph can be scheduled any number of
/// times.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    nodes: Vec<TaskNode>,
    index: HashMap<TaskId, usize>,
    /// Ids that appeared more than once and were resolved by last-write-wins.
    overwritten: Vec<TaskId>,
}

/// Build a graph with the default duplicate policy (last-write-wins).
///
/// With that policy this never fails; the `Result` is kept so callers are
/// ready for [`TaskGraph::build`] with [`DuplicateIdPolicy::Reject`].
pub fn build_graph(tasks: impl IntoIterator<Item = Task>) -> Result<TaskGraph, ValidationError> {
    TaskGraph::build(tasks, DuplicateIdPolicy::default())
}

impl TaskGraph {
    /// Build the arena, the id index and the reverse adjacency.
    ///
    /// Under [`DuplicateIdPolicy::LastWriteWins`] a repeated id replaces the
    /// earlier record but keeps the earlier record's input position.
    pub fn build(
        tasks: impl IntoIterator<Item = Task>,
        policy: DuplicateIdPolicy,
    ) -> Result<Self, ValidationError> {
        let mut nodes: Vec<TaskNode> = Vec::new();
        let mut index: HashMap<TaskId, usize> = HashMap::new();
        let mut overwritten: Vec<TaskId> = Vec::new();

        // First pass: place records.
        for task in tasks {
            match index.get(&task.id) {
                Some(&slot) => match policy {
                    DuplicateIdPolicy::Reject => {
                        return Err(ValidationError::DuplicateId(task.id));
                    }
                    DuplicateIdPolicy::LastWriteWins => {
                        warn!(task = task.id, "duplicate task id; later record wins");
                        if !overwritten.contains(&task.id) {
                            overwritten.push(task.id);
                        }
                        nodes[slot].task = task;
                    }
                },
                None => {
                    index.insert(task.id, nodes.len());
                    nodes.push(TaskNode {
                        task,
                        deps: Vec::new(),
                        dependents: Vec::new(),
                    });
                }
            }
        }

        // Second pass: resolve dependency ids now that every record is known.
        for slot in 0..nodes.len() {
            let mut seen: HashSet<TaskId> = HashSet::new();
            let mut deps = Vec::new();

            for &dep_id in nodes[slot].task.depends_on.iter() {
                if !seen.insert(dep_id) {
                    continue;
                }
                match index.get(&dep_id) {
                    Some(&dep_slot) => deps.push(Dependency::Known {
                        id: dep_id,
                        slot: dep_slot,
                    }),
                    None => {
                        warn!(
                            task = nodes[slot].task.id,
                            dep = dep_id,
                            "dependency is not part of the task set; it can never be satisfied"
                        );
                        deps.push(Dependency::Dangling(dep_id));
                    }
                }
            }

            for dep in deps.iter() {
                if let Dependency::Known { slot: dep_slot, .. } = *dep {
                    nodes[dep_slot].dependents.push(slot);
                }
            }
            nodes[slot].deps = deps;
        }

        debug!(
            tasks = nodes.len(),
            edges = nodes.iter().map(|n| n.deps.len()).sum::<usize>(),
            overwritten = overwritten.len(),
            "task graph built"
        );

        Ok(Self {
            nodes,
            index,
            overwritten,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.index.get(&id).map(|&slot| &self.nodes[slot].task)
    }

    /// Tasks in input order (duplicates collapsed).
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.nodes.iter().map(|n| &n.task)
    }

    /// Task ids in input order.
    pub fn ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.nodes.iter().map(|n| n.task.id)
    }

    /// Input position of a task.
    pub fn slot_of(&self, id: TaskId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Distinct immediate dependencies of a task, known and dangling.
    pub fn dependencies_of(&self, id: TaskId) -> &[Dependency] {
        self.index
            .get(&id)
            .map(|&slot| self.nodes[slot].deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of a task (tasks that list it in `depends_on`).
    pub fn dependents_of(&self, id: TaskId) -> Vec<TaskId> {
        self.index
            .get(&id)
            .map(|&slot| {
                self.nodes[slot]
                    .dependents
                    .iter()
                    .map(|&d| self.nodes[d].task.id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `(task, missing dependency)` pairs, in input order.
    pub fn dangling_dependencies(&self) -> Vec<(TaskId, TaskId)> {
        self.nodes
            .iter()
            .flat_map(|n| {
                n.deps
                    .iter()
                    .filter(|d| d.is_dangling())
                    .map(move |d| (n.task.id, d.id()))
            })
            .collect()
    }

    /// Ids whose earlier records were replaced under last-write-wins.
    pub fn overwritten_ids(&self) -> &[TaskId] {
        &self.overwritten
    }

    pub(crate) fn nodes(&self) -> &[TaskNode] {
        &self.nodes
    }
}
