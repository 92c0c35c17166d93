// tests/fallback_behaviour.rs
mod common;
use crate::common::builders::TaskSetBuilder;
use crate::common::init_tracing;

use std::error::Error;

use taskorder::dag::{schedule, GraphDiagnostics, Scheduler, SchedulerStep};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn mutual_cycle_is_ordered_by_priority_after_free_task() -> TestResult {
    init_tracing();

    // 1 <-> 2 cycle, 3 unconstrained.
    let graph = TaskSetBuilder::new()
        .task(1, 1, &[2])
        .task(2, 5, &[1])
        .task(3, 0, &[])
        .graph();

    let result = schedule(&graph);

    assert_eq!(result.order, vec![3, 2, 1]);
    assert_eq!(result.fallback_start, Some(1));
    assert_eq!(result.fallback_ids(), &[2, 1]);
    Ok(())
}

#[test]
fn dangling_reference_is_emitted_through_fallback() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new().task(1, 5, &[99]).graph();
    let result = schedule(&graph);

    assert_eq!(result.order, vec![1]);
    assert_eq!(result.fallback_start, Some(0));
    Ok(())
}

#[test]
fn self_dependency_never_becomes_eligible() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new()
        .task(1, 9, &[1])
        .task(2, 0, &[])
        .graph();

    let result = schedule(&graph);
    assert_eq!(result.order, vec![2, 1]);
    assert_eq!(result.fallback_ids(), &[1]);

    let diag = GraphDiagnostics::analyze(&graph);
    assert_eq!(diag.cycles, vec![vec![1]]);
    Ok(())
}

#[test]
fn fallback_covers_whole_remainder_and_ignores_dependencies() -> TestResult {
    init_tracing();

    // 3 depends on the cycle, so it is stuck too; in fallback its priority
    // puts it ahead of the tasks it depends on.
    let graph = TaskSetBuilder::new()
        .task(1, 0, &[2])
        .task(2, 0, &[1])
        .task(3, 100, &[1])
        .task(4, 0, &[])
        .graph();

    let mut run = Scheduler::default().start(&graph);

    assert_eq!(run.step(), SchedulerStep::Picked(4));
    assert_eq!(run.step(), SchedulerStep::Fallback(vec![3, 1, 2]));
    assert_eq!(run.step(), SchedulerStep::Finished);

    let diag = GraphDiagnostics::analyze(&graph);
    assert_eq!(diag.cycles, vec![vec![1, 2]]);
    assert_eq!(diag.blocked, vec![1, 2, 3]);
    assert!(!diag.is_clean());
    Ok(())
}

#[test]
fn tasks_after_a_dangling_dependency_are_blocked_too() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new()
        .task(1, 0, &[42])
        .task(2, 7, &[1])
        .task(3, 1, &[])
        .graph();

    let result = schedule(&graph);
    assert_eq!(result.order, vec![3, 2, 1]);

    let diag = GraphDiagnostics::analyze(&graph);
    assert_eq!(diag.dangling, vec![(1, 42)]);
    assert!(diag.cycles.is_empty());
    assert_eq!(diag.blocked, vec![1, 2]);
    Ok(())
}

#[test]
fn acyclic_graph_is_clean() -> TestResult {
    let graph = TaskSetBuilder::new()
        .task(1, 0, &[])
        .task(2, 0, &[1])
        .graph();

    let diag = GraphDiagnostics::analyze(&graph);
    assert!(diag.is_clean());
    assert!(diag.blocked.is_empty());
    Ok(())
}
