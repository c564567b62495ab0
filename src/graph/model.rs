use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{PathglowError, PathglowResult};

/// Directed weighted adjacency map: node name -> neighbor name -> weight.
///
/// Serialized as a plain JSON object, e.g. `{"start": {"A": 4}, "A": {"finish": 1}, "finish": {}}`.
/// Nodes are kept in name order so iteration (and therefore seeded layouts) is stable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: BTreeMap<String, BTreeMap<String, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: impl Into<String>) -> &mut Self {
        self.adjacency.entry(name.into()).or_default();
        self
    }

    /// Insert (or overwrite) the edge `parent -> child`. Both endpoints become nodes.
    pub fn add_edge(
        &mut self,
        parent: impl Into<String>,
        child: impl Into<String>,
        weight: f64,
    ) -> &mut Self {
        let child = child.into();
        self.adjacency.entry(child.clone()).or_default();
        self.adjacency
            .entry(parent.into())
            .or_default()
            .insert(child, weight);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = (&str, f64)> {
        self.adjacency
            .get(name)
            .into_iter()
            .flat_map(|n| n.iter().map(|(k, w)| (k.as_str(), *w)))
    }

    /// Every `(parent, child, weight)` triple, parents in name order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.adjacency.iter().flat_map(|(parent, neighbors)| {
            neighbors
                .iter()
                .map(move |(child, w)| (parent.as_str(), child.as_str(), *w))
        })
    }

    pub fn weight(&self, parent: &str, child: &str) -> Option<f64> {
        self.adjacency.get(parent)?.get(child).copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Largest weight anywhere in the graph, `None` without edges.
    pub fn max_weight(&self) -> Option<f64> {
        self.edges().map(|(_, _, w)| w).reduce(f64::max)
    }

    /// Strict check used before running untrusted input.
    ///
    /// Layout and playback tolerate everything this rejects; the solver does not.
    pub fn validate(&self) -> PathglowResult<()> {
        for (parent, child, w) in self.edges() {
            if !w.is_finite() {
                return Err(PathglowError::graph(format!(
                    "edge {parent} -> {child} has non-finite weight {w}"
                )));
            }
            if w < 0.0 {
                return Err(PathglowError::graph(format!(
                    "edge {parent} -> {child} has negative weight {w}"
                )));
            }
            if !self.contains(child) {
                return Err(PathglowError::graph(format!(
                    "edge {parent} -> {child} points at unknown node \"{child}\""
                )));
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, BTreeMap<String, f64>)> for Graph {
    fn from_iter<I: IntoIterator<Item = (String, BTreeMap<String, f64>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/model.rs"]
mod tests;
