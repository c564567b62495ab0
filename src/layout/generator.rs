use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::foundation::{
    core::{Canvas, Point},
    error::PathglowResult,
};
use crate::graph::model::Graph;

/// A graph node placed on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A directed edge between two placed nodes.
///
/// `parent` and `child` are keys into [`Layout::points`]; coordinates live only there.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Link {
    pub parent: String,
    pub child: String,
    pub normalized_weight: f64,
}

impl Link {
    pub fn joins(&self, parent: &str, child: &str) -> bool {
        self.parent == parent && self.child == child
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Layout {
    pub points: BTreeMap<String, LayoutPoint>,
    pub links: Vec<Link>,
}

impl Layout {
    pub fn point(&self, name: &str) -> Option<&LayoutPoint> {
        self.points.get(name)
    }

    /// Resolve both ends of `link` against the point table.
    pub fn endpoints(&self, link: &Link) -> Option<(&LayoutPoint, &LayoutPoint)> {
        Some((self.point(&link.parent)?, self.point(&link.child)?))
    }
}

/// Place every node uniformly at random inside `canvas` and normalize edge weights by the
/// heaviest edge in the graph.
///
/// Coordinates are rounded to whole pixels. A graph whose heaviest edge is not positive gets
/// normalized weight `0` everywhere. Neighbors that are not themselves nodes have nowhere to be
/// drawn and are left out.
#[tracing::instrument(skip(graph, rng), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn generate_layout<R>(canvas: Canvas, graph: &Graph, rng: &mut R) -> PathglowResult<Layout>
where
    R: Rng + ?Sized,
{
    canvas.validate()?;
    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);

    let points: BTreeMap<String, LayoutPoint> = graph
        .nodes()
        .map(|name| {
            let x = (rng.r#gen::<f64>() * width).round();
            let y = (rng.r#gen::<f64>() * height).round();
            (
                name.to_owned(),
                LayoutPoint {
                    name: name.to_owned(),
                    x,
                    y,
                },
            )
        })
        .collect();

    let scale = match graph.max_weight() {
        Some(max) if max > 0.0 && max.is_finite() => Some(max),
        _ => None,
    };

    let mut links = Vec::with_capacity(graph.edge_count());
    for (parent, child, w) in graph.edges() {
        if !points.contains_key(child) {
            tracing::warn!(parent, child, "neighbor is not a node; link skipped");
            continue;
        }
        links.push(Link {
            parent: parent.to_owned(),
            child: child.to_owned(),
            normalized_weight: scale.map_or(0.0, |max| w / max),
        });
    }

    tracing::debug!(points = points.len(), links = links.len(), "layout generated");
    Ok(Layout { points, links })
}

/// [`generate_layout`] with the thread-local RNG; every call yields a fresh arrangement.
pub fn generate_layout_unseeded(canvas: Canvas, graph: &Graph) -> PathglowResult<Layout> {
    generate_layout(canvas, graph, &mut rand::thread_rng())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/generator.rs"]
mod tests;
