// src/dag/mod.rs

//! Task graph and ordering.
//!
//! - [`task`] defines the immutable input record.
//! - [`graph`] builds the arena of tasks with forward and reverse edges.
//! - [`ordering`] is the priority/deadline/tie-break comparator.
//! - [`scheduler`] contains the per-run state machine that repeatedly picks
//!   the best eligible task and falls back to priority order when stuck.
//! - [`result`] holds the finished order.
//! - [`diagnostics`] explains cycles and dangling references.

pub mod diagnostics;
pub mod graph;
pub mod ordering;
pub mod result;
pub mod scheduler;
pub mod task;

pub use diagnostics::GraphDiagnostics;
pub use graph::{build_graph, Dependency, TaskGraph};
pub use ordering::{compare, SelectionKey};
pub use result::ScheduleResult;
pub use scheduler::{schedule, ScheduleRun, Scheduler, SchedulerStep};
pub use task::{Task, TaskId};
