use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::render::surface::{EdgeAttrs, VertexAttrs};

/// Visual parameters of the drawn graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background: Color,
    /// Stroke width at normalized weight 0 and 1.
    pub edge_width_range: [f64; 2],
    /// Stroke color at normalized weight 0 and 1, interpolated in Lab.
    pub edge_color_range: [Color; 2],
    pub node_fill: Color,
    pub node_stroke: Color,
    pub node_radius: f64,
    pub endpoint_radius: f64,
    /// Nodes drawn with `endpoint_radius`.
    pub endpoint_names: Vec<String>,
    pub highlight_color: Color,
    pub highlight_stroke_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0xcc, 0xcc, 0xcc),
            edge_width_range: [1.0, 10.0],
            edge_color_range: [Color::from_rgb8(0, 128, 0), Color::from_rgb8(255, 0, 0)],
            node_fill: Color::WHITE,
            node_stroke: Color::BLACK,
            node_radius: 5.0,
            endpoint_radius: 10.0,
            endpoint_names: vec!["start".to_owned(), "finish".to_owned()],
            highlight_color: Color::from_rgb8(0xff, 0xcc, 0x00),
            highlight_stroke_width: 5.0,
        }
    }
}

impl RenderStyle {
    pub fn edge_attrs(&self, normalized_weight: f64) -> EdgeAttrs {
        let t = if normalized_weight.is_finite() {
            normalized_weight.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let [w0, w1] = self.edge_width_range;
        let [c0, c1] = self.edge_color_range;
        EdgeAttrs {
            stroke: Color::lerp_lab(c0, c1, t),
            stroke_width: w0 + (w1 - w0) * t,
        }
    }

    pub fn vertex_attrs(&self, name: &str) -> VertexAttrs {
        let radius = if self.endpoint_names.iter().any(|n| n == name) {
            self.endpoint_radius
        } else {
            self.node_radius
        };
        VertexAttrs {
            fill: self.node_fill,
            stroke: self.node_stroke,
            radius,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
