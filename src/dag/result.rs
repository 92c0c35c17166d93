// src/dag/result.rs

//! The output of one scheduling run.

use serde::Serialize;

use crate::dag::task::TaskId;

/// Total order over every task in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    /// Task ids, best first. Each id appears exactly once.
    pub order: Vec<TaskId>,
    /// Rank at which fallback mode took over, if it did.
    ///
    /// Everything from this rank on was ordered by priority/deadline/tie-break
    /// only, without regard to dependencies.
    pub fallback_start: Option<usize>,
}

impl ScheduleResult {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 0-based position of `id` in the order.
    pub fn rank_of(&self, id: TaskId) -> Option<usize> {
        self.order.iter().position(|&x| x == id)
    }

    /// `(rank, id)` pairs in order.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, TaskId)> + '_ {
        self.order.iter().copied().enumerate()
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback_start.is_some()
    }

    /// Ids that were placed by fallback mode.
    pub fn fallback_ids(&self) -> &[TaskId] {
        match self.fallback_start {
            Some(start) => &self.order[start..],
            None => &[],
        }
    }
}
