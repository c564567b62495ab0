use crate::layout::generator::Layout;
use crate::render::style::RenderStyle;
use crate::render::surface::{EdgeHandle, Selection, Surface, VertexHandle};

/// Handles returned by [`draw_layout`].
#[derive(Clone, Debug, Default)]
pub struct DrawnGraph {
    pub edges: Selection<EdgeHandle>,
    pub vertices: Selection<VertexHandle>,
}

/// Draw every link as a styled line and every point as a marker.
///
/// Links go down first so vertices sit on top of them.
#[tracing::instrument(skip_all, fields(points = layout.points.len(), links = layout.links.len()))]
pub fn draw_layout<S>(surface: &mut S, layout: &Layout, style: &RenderStyle) -> DrawnGraph
where
    S: Surface + ?Sized,
{
    let mut drawn = DrawnGraph::default();

    for link in &layout.links {
        let Some((parent, child)) = layout.endpoints(link) else {
            continue;
        };
        let attrs = style.edge_attrs(link.normalized_weight);
        let id = surface.draw_line(link, parent.pos(), child.pos(), attrs);
        drawn.edges.push(EdgeHandle {
            id,
            link: link.clone(),
        });
    }

    for point in layout.points.values() {
        let id = surface.draw_circle(point, style.vertex_attrs(&point.name));
        drawn.vertices.push(VertexHandle {
            id,
            name: point.name.clone(),
        });
    }

    drawn
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
