use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{PathglowError, PathglowResult};
use crate::graph::model::Graph;

/// Route returned by a [`Solver`], ordered from `finish` back to `start` (both inclusive).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SolvedPath {
    pub path: Vec<String>,
}

impl SolvedPath {
    /// Build from a route listed in walking order (`start` first).
    pub fn from_walk<I, S>(walk: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path: Vec<String> = walk.into_iter().map(Into::into).collect();
        path.reverse();
        Self { path }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Path-finding strategy plugged into the pipeline.
///
/// Any `Fn(&Graph, &str, &str) -> PathglowResult<SolvedPath>` is a solver.
pub trait Solver {
    fn solve(&self, graph: &Graph, start: &str, finish: &str) -> PathglowResult<SolvedPath>;
}

impl<F> Solver for F
where
    F: Fn(&Graph, &str, &str) -> PathglowResult<SolvedPath>,
{
    fn solve(&self, graph: &Graph, start: &str, finish: &str) -> PathglowResult<SolvedPath> {
        self(graph, start, finish)
    }
}

/// Lowest total weight route, Dijkstra over non-negative weights.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

struct Candidate<'g> {
    cost: f64,
    seq: u64,
    node: &'g str,
}

// Min-heap on (cost, seq).
impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl Solver for DijkstraSolver {
    #[tracing::instrument(skip(self, graph))]
    fn solve(&self, graph: &Graph, start: &str, finish: &str) -> PathglowResult<SolvedPath> {
        for endpoint in [start, finish] {
            if !graph.contains(endpoint) {
                return Err(PathglowError::solver(format!(
                    "unknown endpoint \"{endpoint}\""
                )));
            }
        }

        let mut cost_so_far: BTreeMap<&str, f64> = BTreeMap::new();
        let mut came_from: BTreeMap<&str, &str> = BTreeMap::new();
        let mut open = BinaryHeap::new();
        let mut seq = 0u64;

        cost_so_far.insert(start, 0.0);
        open.push(Candidate {
            cost: 0.0,
            seq,
            node: start,
        });

        while let Some(Candidate { cost, node, .. }) = open.pop() {
            if node == finish {
                let mut path = vec![finish.to_owned()];
                let mut cur = finish;
                while let Some(&prev) = came_from.get(cur) {
                    path.push(prev.to_owned());
                    cur = prev;
                }
                tracing::debug!(hops = path.len() - 1, cost, "route found");
                return Ok(SolvedPath { path });
            }
            if cost_so_far.get(node).is_some_and(|&best| cost > best) {
                continue;
            }

            for (next, w) in graph.neighbors(node) {
                if !(w.is_finite() && w >= 0.0) {
                    return Err(PathglowError::solver(format!(
                        "edge {node} -> {next} has unusable weight {w}"
                    )));
                }
                let new_cost = cost + w;
                if cost_so_far.get(next).is_none_or(|&best| new_cost < best) {
                    cost_so_far.insert(next, new_cost);
                    came_from.insert(next, node);
                    seq += 1;
                    open.push(Candidate {
                        cost: new_cost,
                        seq,
                        node: next,
                    });
                }
            }
        }

        Err(PathglowError::solver(format!(
            "no route from \"{start}\" to \"{finish}\""
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/solve.rs"]
mod tests;
