//! Kahn's algorithm over a [`DependencyGraph`].
//!
//! The sort works on its own counters and reverse adjacency, so the graph is
//! left untouched and can be sorted again. Any node whose dependency count is
//! zero may be placed next; the frontier is a FIFO seeded in insertion order,
//! which makes the output reproducible but is not part of the contract.

use std::collections::VecDeque;

use super::error::SortError;
use super::node::{DependencyGraph, NodeId};

impl DependencyGraph {
    /// Build order as file names, prerequisites first
    pub fn toposort(&self) -> Result<Vec<String>, SortError> {
        let order = self.toposort_ids()?;
        Ok(order
            .into_iter()
            .map(|id| self.node(id).name().to_string())
            .collect())
    }

    pub fn toposort_ids(&self) -> Result<Vec<NodeId>, SortError> {
        let mut remaining: Vec<usize> = self
            .nodes()
            .iter()
            .map(|node| node.dependencies().len())
            .collect();
        let dependents = self.dependents();

        let mut frontier: VecDeque<NodeId> =
            self.ids().filter(|id| remaining[id.index()] == 0).collect();

        if frontier.is_empty() && !self.is_empty() {
            return Err(SortError::NoRoots {
                adjacency: self.adjacency(),
            });
        }

        let mut order = Vec::with_capacity(self.len());
        while let Some(id) = frontier.pop_front() {
            order.push(id);
            for &dependent in &dependents[id.index()] {
                let count = &mut remaining[dependent.index()];
                *count -= 1;
                if *count == 0 {
                    frontier.push_back(dependent);
                }
            }
        }

        if order.len() < self.len() {
            return Err(SortError::Cycle {
                residual: self.residual(&order),
            });
        }

        Ok(order)
    }

    /// Nodes left out of `placed`, each with the dependencies also left out
    fn residual(&self, placed: &[NodeId]) -> Vec<(String, Vec<String>)> {
        let mut done = vec![false; self.len()];
        for id in placed {
            done[id.index()] = true;
        }

        self.ids()
            .filter(|id| !done[id.index()])
            .map(|id| {
                let node = self.node(id);
                let pending: Vec<NodeId> = node
                    .dependencies()
                    .iter()
                    .copied()
                    .filter(|dep| !done[dep.index()])
                    .collect();
                (node.name().to_string(), self.names(&pending))
            })
            .collect()
    }
}
