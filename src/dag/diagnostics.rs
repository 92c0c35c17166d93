// src/dag/diagnostics.rs

//! Graph health report: dependency cycles, dangling references and the
//! tasks that will end up in fallback mode because of them.
//!
//! None of this is needed to compute an order; it explains *why* a
//! schedule contains a priority-only tail.

use std::collections::BTreeSet;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;
use serde::Serialize;

use crate::dag::graph::{Dependency, TaskGraph};
use crate::dag::task::TaskId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphDiagnostics {
    /// Each group of mutually dependent tasks (sorted ids), including
    /// single tasks that depend on themselves.
    pub cycles: Vec<Vec<TaskId>>,
    /// `(task, missing dependency)` pairs.
    pub dangling: Vec<(TaskId, TaskId)>,
    /// Every task that can never become eligible: members of a cycle,
    /// tasks with a dangling dependency, and everything downstream of them.
    pub blocked: Vec<TaskId>,
}

impl GraphDiagnostics {
    pub fn analyze(graph: &TaskGraph) -> Self {
        // Edge direction: dependency -> dependent.
        let mut g: DiGraphMap<TaskId, ()> = DiGraphMap::new();
        for id in graph.ids() {
            g.add_node(id);
        }
        for task in graph.tasks() {
            for dep in graph.dependencies_of(task.id) {
                if let Dependency::Known { id, .. } = *dep {
                    g.add_edge(id, task.id, ());
                }
            }
        }

        let mut cycles: Vec<Vec<TaskId>> = tarjan_scc(&g)
            .into_iter()
            .filter(|scc| scc.len() > 1 || g.contains_edge(scc[0], scc[0]))
            .map(|mut scc| {
                scc.sort_unstable();
                scc
            })
            .collect();
        cycles.sort();

        let dangling = graph.dangling_dependencies();

        let roots = cycles
            .iter()
            .flatten()
            .copied()
            .chain(dangling.iter().map(|&(task, _)| task));

        let mut blocked: BTreeSet<TaskId> = BTreeSet::new();
        for root in roots {
            if blocked.contains(&root) {
                continue;
            }
            let mut dfs = Dfs::new(&g, root);
            while let Some(id) = dfs.next(&g) {
                blocked.insert(id);
            }
        }

        Self {
            cycles,
            dangling,
            blocked: blocked.into_iter().collect(),
        }
    }

    /// `true` when every task can be ordered by dependencies alone.
    pub fn is_clean(&self) -> bool {
        self.cycles.is_empty() && self.dangling.is_empty()
    }
}
