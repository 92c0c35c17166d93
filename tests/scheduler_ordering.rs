// tests/scheduler_ordering.rs
mod common;
use crate::common::builders::{TaskBuilder, TaskSetBuilder};
use crate::common::init_tracing;

use std::cmp::Ordering;
use std::error::Error;

use taskorder::dag::{compare, schedule, ScheduleResult, Scheduler, SchedulerStep, TaskGraph};
use taskorder::types::TieBreak;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn example_scenario_orders_three_then_one_then_two() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new()
        .task(1, 5, &[])
        .task(2, 1, &[1])
        .task(3, 10, &[])
        .graph();

    let result = schedule(&graph);

    assert_eq!(result.order, vec![3, 1, 2]);
    assert!(!result.used_fallback());
    assert_eq!(result.rank_of(2), Some(2));
    Ok(())
}

#[test]
fn dependency_beats_priority() -> TestResult {
    init_tracing();

    // 1 has the highest priority but must wait for 2.
    let graph = TaskSetBuilder::new()
        .task(1, 100, &[2])
        .task(2, 0, &[])
        .task(3, 50, &[])
        .graph();

    assert_eq!(schedule(&graph).order, vec![3, 2, 1]);
    Ok(())
}

#[test]
fn newly_eligible_task_competes_on_priority() -> TestResult {
    init_tracing();

    // Once 1 is placed, 2 (priority 9) jumps ahead of 3 (priority 5).
    let graph = TaskSetBuilder::new()
        .task(1, 10, &[])
        .task(2, 9, &[1])
        .task(3, 5, &[])
        .graph();

    assert_eq!(schedule(&graph).order, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn earlier_deadline_wins_priority_ties_and_missing_deadline_is_last() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new()
        .with_task(TaskBuilder::new(1).priority(1).deadline(200).build())
        .with_task(TaskBuilder::new(2).priority(1).deadline(100).build())
        .with_task(TaskBuilder::new(3).priority(1).build())
        .with_task(TaskBuilder::new(4).priority(1).deadline(i64::MAX - 1).build())
        .graph();

    assert_eq!(schedule(&graph).order, vec![2, 1, 4, 3]);
    Ok(())
}

#[test]
fn largest_possible_deadline_still_beats_no_deadline() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new()
        .with_task(TaskBuilder::new(1).priority(1).build())
        .with_task(TaskBuilder::new(2).priority(1).deadline(i64::MAX).build())
        .graph();

    assert_eq!(schedule(&graph).order, vec![2, 1]);

    let none = TaskBuilder::new(1).build();
    let max = TaskBuilder::new(2).deadline(i64::MAX).build();
    assert_eq!(compare(&max, 1, &none, 0, TieBreak::Id), Ordering::Less);
    Ok(())
}

#[test]
fn priority_dominates_deadline() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new()
        .with_task(TaskBuilder::new(1).priority(1).deadline(10).build())
        .with_task(TaskBuilder::new(2).priority(2).build())
        .graph();

    assert_eq!(schedule(&graph).order, vec![2, 1]);
    Ok(())
}

#[test]
fn full_ties_break_on_smallest_id_by_default() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new()
        .task(5, 0, &[])
        .task(2, 0, &[])
        .task(9, 0, &[])
        .graph();

    assert_eq!(schedule(&graph).order, vec![2, 5, 9]);
    Ok(())
}

#[test]
fn insertion_tie_break_preserves_input_order() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new()
        .task(5, 0, &[])
        .task(2, 0, &[])
        .task(9, 0, &[])
        .task(1, 3, &[])
        .graph();

    let result = Scheduler::new(TieBreak::Insertion).run(&graph);
    assert_eq!(result.order, vec![1, 5, 2, 9]);
    Ok(())
}

#[test]
fn manual_steps_expose_eligible_set_and_counters() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new()
        .task(1, 5, &[])
        .task(2, 1, &[1])
        .task(3, 10, &[])
        .graph();

    let scheduler = Scheduler::default();
    let mut run = scheduler.start(&graph);

    assert_eq!(run.eligible(), vec![3, 1]);
    assert_eq!(run.remaining_dependency_count(2), Some(1));
    assert_eq!(run.remaining_dependency_count(42), None);

    assert_eq!(run.step(), SchedulerStep::Picked(3));
    assert_eq!(run.step(), SchedulerStep::Picked(1));

    assert_eq!(run.eligible(), vec![2]);
    assert_eq!(run.remaining_dependency_count(2), Some(0));

    assert_eq!(run.step(), SchedulerStep::Picked(2));
    assert!(run.is_finished());
    assert_eq!(run.step(), SchedulerStep::Finished);
    assert_eq!(run.scheduled(), &[3, 1, 2]);
    Ok(())
}

#[test]
fn same_graph_schedules_identically_twice() -> TestResult {
    init_tracing();

    let graph = TaskSetBuilder::new()
        .task(4, 2, &[3])
        .task(3, 2, &[])
        .task(2, 2, &[])
        .task(1, 7, &[2, 3])
        .graph();

    let first = schedule(&graph);
    let second = schedule(&graph);
    assert_eq!(first, second);
    assert_eq!(first.order, vec![2, 3, 1, 4]);
    Ok(())
}

#[test]
fn empty_graph_yields_empty_order() -> TestResult {
    let graph = TaskSetBuilder::new().graph();
    let result = schedule(&graph);
    assert!(result.is_empty());
    assert!(!result.used_fallback());
    Ok(())
}

#[test]
fn comparator_ranks_priority_then_deadline_then_tie_break() {
    let high = TaskBuilder::new(9).priority(3).build();
    let soon = TaskBuilder::new(8).priority(1).deadline(50).build();
    let late = TaskBuilder::new(7).priority(1).deadline(60).build();
    let never = TaskBuilder::new(1).priority(1).build();

    assert_eq!(compare(&high, 0, &soon, 1, TieBreak::Id), Ordering::Less);
    assert_eq!(compare(&soon, 1, &late, 2, TieBreak::Id), Ordering::Less);
    assert_eq!(compare(&never, 3, &late, 2, TieBreak::Id), Ordering::Greater);

    let a = TaskBuilder::new(2).build();
    let b = TaskBuilder::new(1).build();
    assert_eq!(compare(&a, 0, &b, 1, TieBreak::Id), Ordering::Greater);
    assert_eq!(compare(&a, 0, &b, 1, TieBreak::Insertion), Ordering::Less);
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shared_graph_schedules_identically_across_threads() -> TestResult {
    init_tracing();
    assert_send_sync::<TaskGraph>();
    assert_send_sync::<ScheduleResult>();

    let graph = TaskSetBuilder::new()
        .task(1, 5, &[])
        .task(2, 1, &[1])
        .task(3, 10, &[])
        .task(4, 10, &[2, 5])
        .task(5, 0, &[4])
        .graph();
    let expected = schedule(&graph);

    let results: Vec<ScheduleResult> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let graph = &graph;
                scope.spawn(move || schedule(graph))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("scheduler thread panicked"))
            .collect()
    });

    assert_eq!(results.len(), 8);
    for result in results {
        assert_eq!(result, expected);
    }
    assert_eq!(expected.order, vec![3, 1, 2, 4, 5]);
    Ok(())
}
