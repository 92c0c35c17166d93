// src/dag/ordering.rs

//! The selection order used both for eligible tasks and for the fallback
//! remainder.
//!
//! Tasks are ranked by:
//! 1. higher `priority` first
//! 2. earlier `deadline` first (absent deadline sorts last)
//! 3. the configured [`TieBreak`]: smallest id, or earliest input position

use std::cmp::{Ordering, Reverse};

use crate::dag::task::Task;
use crate::types::TieBreak;

/// Precomputed, static ranking key of one task.
///
/// `Ord` is arranged so that the *smaller* key is the one that goes first,
/// which lets a `BinaryHeap<Reverse<SelectionKey>>` pop the best candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SelectionKey {
    priority: Reverse<i64>,
    /// `(absent, value)`: any deadline, even `i64::MAX`, beats none.
    deadline: (bool, i64),
    tie: i64,
    /// Arena slot of the task. `tie` is unique per task, so this never
    /// decides the order.
    slot: usize,
}

impl SelectionKey {
    /// Build the key for the task stored at `slot` in the graph arena.
    pub fn new(task: &Task, slot: usize, tie_break: TieBreak) -> Self {
        let tie = match tie_break {
            TieBreak::Id => task.id,
            TieBreak::Insertion => slot as i64,
        };

        Self {
            priority: Reverse(task.priority),
            deadline: (task.deadline.is_none(), task.deadline.unwrap_or(0)),
            tie,
            slot,
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Compare two tasks by selection order.
///
/// `Ordering::Less` means `a` is ordered before `b`. `a_slot`/`b_slot` are
/// the input positions, only consulted under [`TieBreak::Insertion`].
pub fn compare(a: &Task, a_slot: usize, b: &Task, b_slot: usize, tie_break: TieBreak) -> Ordering {
    SelectionKey::new(a, a_slot, tie_break).cmp(&SelectionKey::new(b, b_slot, tie_break))
}
