use std::fmt::Write as _;

use crate::foundation::color::Color;
use crate::render::scene::SceneFrame;

/// Serialize a resolved frame as a standalone SVG document.
///
/// Edges are `<path>` elements tagged with `data-parent`/`data-child`, vertices are `<circle>`
/// elements tagged with `data-name`.
pub fn frame_to_svg(frame: &SceneFrame) -> String {
    let w = frame.canvas.width;
    let h = frame.canvas.height;
    let mut out = String::with_capacity(256 + 160 * (frame.edges.len() + frame.vertices.len()));

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{w}" height="{h}"{}/>"#,
        paint("fill", frame.background)
    );
    out.push_str("  <g>\n");

    for e in &frame.edges {
        let _ = writeln!(
            out,
            r#"    <path d="M{},{} L{},{}" fill="none"{} stroke-width="{}" data-parent="{}" data-child="{}"/>"#,
            e.from.x,
            e.from.y,
            e.to.x,
            e.to.y,
            paint("stroke", e.attrs.stroke),
            e.attrs.stroke_width,
            escape(&e.parent),
            escape(&e.child),
        );
    }

    for v in &frame.vertices {
        let _ = writeln!(
            out,
            r#"    <circle cx="{}" cy="{}" r="{}"{}{} data-name="{}"/>"#,
            v.center.x,
            v.center.y,
            v.attrs.radius,
            paint("fill", v.attrs.fill),
            paint("stroke", v.attrs.stroke),
            escape(&v.name),
        );
    }

    out.push_str("  </g>\n</svg>\n");
    out
}

fn paint(attr: &str, color: Color) -> String {
    let [r, g, b, a] = color.to_rgba8();
    let opaque = Color::from_rgb8(r, g, b).to_hex();
    if a == 255 {
        format!(r#" {attr}="{opaque}""#)
    } else {
        let opacity = f64::from(a) / 255.0;
        format!(r#" {attr}="{opaque}" {attr}-opacity="{opacity:.3}""#)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
