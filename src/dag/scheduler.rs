// src/dag/scheduler.rs

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, info, warn};

use crate::dag::graph::TaskGraph;
use crate::dag::ordering::SelectionKey;
use crate::dag::result::ScheduleResult;
use crate::dag::task::TaskId;
use crate::types::TieBreak;

/// Order a graph with the default tie-break (smallest id).
pub fn schedule(graph: &TaskGraph) -> ScheduleResult {
    Scheduler::default().run(graph)
}

/// Scheduler holds the ordering options; each call to [`Scheduler::start`]
/// creates an independent [`ScheduleRun`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    tie_break: TieBreak,
}

/// Structured result of a single scheduler step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerStep {
    /// The best eligible task was appended to the order.
    Picked(TaskId),
    /// No task was eligible; the whole remainder was appended in selection
    /// order, ignoring dependencies. The run is finished after this.
    Fallback(Vec<TaskId>),
    /// Every task has been ordered.
    Finished,
}

impl Scheduler {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// Begin a run over `graph`. The graph is only borrowed; all mutable
    /// state lives in the returned run.
    pub fn start<'g>(&self, graph: &'g TaskGraph) -> ScheduleRun<'g> {
        ScheduleRun::new(graph, self.tie_break)
    }

    /// Order every task in `graph`.
    pub fn run(&self, graph: &TaskGraph) -> ScheduleResult {
        self.start(graph).run()
    }
}

/// Per-run state: the `scheduled` prefix, remaining dependency counts and the
/// ready queue.
///
/// A task is eligible once its remaining dependency count hits zero, which
/// only happens when every one of its dependencies was itself scheduled.
/// Dangling dependencies are never decremented, so their dependents are only
/// ever placed by the fallback.
#[derive(Debug)]
pub struct ScheduleRun<'g> {
    graph: &'g TaskGraph,
    /// Static selection key per slot.
    keys: Vec<SelectionKey>,
    /// Dependencies of each slot not yet scheduled.
    remaining: Vec<usize>,
    scheduled: Vec<bool>,
    ready: BinaryHeap<Reverse<SelectionKey>>,
    order: Vec<TaskId>,
    fallback_start: Option<usize>,
}

impl<'g> ScheduleRun<'g> {
    fn new(graph: &'g TaskGraph, tie_break: TieBreak) -> Self {
        let nodes = graph.nodes();

        let keys: Vec<SelectionKey> = nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| SelectionKey::new(&node.task, slot, tie_break))
            .collect();
        let remaining: Vec<usize> = nodes.iter().map(|node| node.deps.len()).collect();

        let ready: BinaryHeap<Reverse<SelectionKey>> = keys
            .iter()
            .filter(|key| remaining[key.slot()] == 0)
            .map(|&key| Reverse(key))
            .collect();

        debug!(
            tasks = nodes.len(),
            initially_ready = ready.len(),
            %tie_break,
            "scheduler: starting run"
        );

        Self {
            graph,
            keys,
            remaining,
            scheduled: vec![false; nodes.len()],
            ready,
            order: Vec::with_capacity(nodes.len()),
            fallback_start: None,
        }
    }

    /// Returns `true` once every task has been placed.
    pub fn is_finished(&self) -> bool {
        self.order.len() == self.graph.len()
    }

    /// The order built so far.
    pub fn scheduled(&self) -> &[TaskId] {
        &self.order
    }

    /// Currently eligible task ids, best first.
    pub fn eligible(&self) -> Vec<TaskId> {
        let mut keys: Vec<SelectionKey> = self.ready.iter().map(|r| r.0).collect();
        keys.sort();
        keys.into_iter().map(|key| self.id_at(key.slot())).collect()
    }

    /// Number of dependencies of `id` that are still unscheduled (dangling
    /// ones included). `None` for unknown ids.
    pub fn remaining_dependency_count(&self, id: TaskId) -> Option<usize> {
        self.graph.slot_of(id).map(|slot| self.remaining[slot])
    }

    /// Advance the run by one step.
    pub fn step(&mut self) -> SchedulerStep {
        if self.is_finished() {
            return SchedulerStep::Finished;
        }

        match self.ready.pop() {
            Some(Reverse(key)) => SchedulerStep::Picked(self.place(key.slot())),
            None => SchedulerStep::Fallback(self.fall_back()),
        }
    }

    /// Step until finished and return the complete order.
    pub fn run(mut self) -> ScheduleResult {
        while self.step() != SchedulerStep::Finished {}

        info!(
            tasks = self.order.len(),
            fallback = self.fallback_start.is_some(),
            "scheduler: run finished"
        );

        ScheduleResult {
            order: self.order,
            fallback_start: self.fallback_start,
        }
    }

    /// Append `slot` to the order and release its dependents.
    fn place(&mut self, slot: usize) -> TaskId {
        let id = self.id_at(slot);
        self.scheduled[slot] = true;
        self.order.push(id);

        debug!(task = id, rank = self.order.len() - 1, "scheduled");

        let graph = self.graph;
        for &dependent in graph.nodes()[slot].dependents.iter() {
            let count = &mut self.remaining[dependent];
            *count -= 1;
            if *count == 0 {
                debug!(
                    task = graph.nodes()[dependent].task.id,
                    "dependencies satisfied; now eligible"
                );
                self.ready.push(Reverse(self.keys[dependent]));
            }
        }

        id
    }

    /// Append every unscheduled task in selection order.
    fn fall_back(&mut self) -> Vec<TaskId> {
        let mut leftover: Vec<SelectionKey> = self
            .keys
            .iter()
            .filter(|key| !self.scheduled[key.slot()])
            .copied()
            .collect();
        leftover.sort();

        let ids: Vec<TaskId> = leftover.iter().map(|key| self.id_at(key.slot())).collect();

        warn!(
            leftover = ?ids,
            rank = self.order.len(),
            "no task is eligible; ordering the remainder by priority only (cycle or missing dependency)"
        );

        self.fallback_start = Some(self.order.len());
        for key in leftover {
            self.scheduled[key.slot()] = true;
        }
        self.order.extend(ids.iter().copied());

        ids
    }

    fn id_at(&self, slot: usize) -> TaskId {
        self.graph.nodes()[slot].task.id
    }
}
