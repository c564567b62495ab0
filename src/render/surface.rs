use serde::Serialize;

use crate::animation::ease::Lerp;
use crate::foundation::{
    color::Color,
    core::{Canvas, Millis, Point},
};
use crate::layout::generator::{LayoutPoint, Link};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EdgeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VertexId(pub u32);

/// Drawn shape addressed by a scheduled mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Target {
    Edge(EdgeId),
    Vertex(VertexId),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeAttrs {
    pub stroke: Color,
    pub stroke_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VertexAttrs {
    pub fill: Color,
    pub stroke: Color,
    pub radius: f64,
}

impl Lerp for EdgeAttrs {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            stroke: <Color as Lerp>::lerp(&a.stroke, &b.stroke, t),
            stroke_width: <f64 as Lerp>::lerp(&a.stroke_width, &b.stroke_width, t),
        }
    }
}

impl Lerp for VertexAttrs {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            fill: <Color as Lerp>::lerp(&a.fill, &b.fill, t),
            stroke: <Color as Lerp>::lerp(&a.stroke, &b.stroke, t),
            radius: <f64 as Lerp>::lerp(&a.radius, &b.radius, t),
        }
    }
}

/// Attribute writes applied together when a scheduled mutation commits.
///
/// Unset fields keep their current value; fields that do not exist on the target shape are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct AttrChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
}

impl AttrChange {
    pub fn stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn apply_to_edge(&self, attrs: EdgeAttrs) -> EdgeAttrs {
        EdgeAttrs {
            stroke: self.stroke.unwrap_or(attrs.stroke),
            stroke_width: self.stroke_width.unwrap_or(attrs.stroke_width),
        }
    }

    pub fn apply_to_vertex(&self, attrs: VertexAttrs) -> VertexAttrs {
        VertexAttrs {
            fill: self.fill.unwrap_or(attrs.fill),
            stroke: self.stroke.unwrap_or(attrs.stroke),
            radius: attrs.radius,
        }
    }
}

/// Drawing primitives the renderer and the path player are written against.
pub trait Surface {
    fn canvas(&self) -> Canvas;

    /// Draw a line for `link` and return its id.
    fn draw_line(&mut self, link: &Link, from: Point, to: Point, attrs: EdgeAttrs) -> EdgeId;

    /// Draw a circular marker for `point` and return its id.
    fn draw_circle(&mut self, point: &LayoutPoint, attrs: VertexAttrs) -> VertexId;

    /// Apply `change` to `target` once `delay` has elapsed on the surface's clock.
    fn schedule(&mut self, target: Target, delay: Millis, change: AttrChange);
}

/// Drawn edge, still bound to the link it came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeHandle {
    pub id: EdgeId,
    pub link: Link,
}

/// Drawn vertex, still bound to the node name it came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VertexHandle {
    pub id: VertexId,
    pub name: String,
}

/// Ordered, filterable collection of handles.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Selection<H> {
    items: Vec<H>,
}

impl<H> Default for Selection<H> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<H> Selection<H> {
    pub fn push(&mut self, handle: H) {
        self.items.push(handle);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, H> {
        self.items.iter()
    }

    pub fn filter<'a, P>(&'a self, mut pred: P) -> impl Iterator<Item = &'a H> + 'a
    where
        P: FnMut(&H) -> bool + 'a,
    {
        self.items.iter().filter(move |h| pred(h))
    }
}

impl<H> FromIterator<H> for Selection<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, H> IntoIterator for &'a Selection<H> {
    type Item = &'a H;
    type IntoIter = std::slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Selection<EdgeHandle> {
    /// Edges drawn for the link `parent -> child`.
    pub fn between<'a>(
        &'a self,
        parent: &'a str,
        child: &'a str,
    ) -> impl Iterator<Item = &'a EdgeHandle> + 'a {
        self.filter(move |h| h.link.joins(parent, child))
    }
}

impl Selection<VertexHandle> {
    /// Vertices drawn for node `name`.
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a VertexHandle> + 'a {
        self.filter(move |h| h.name == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
