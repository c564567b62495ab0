use super::*;
use crate::foundation::core::{Canvas, Millis};
use crate::graph::model::Graph;
use crate::layout::generator::generate_layout;
use crate::render::scene::Scene;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn layout() -> Layout {
    let mut g = Graph::new();
    g.add_edge("start", "A", 1.0)
        .add_edge("A", "finish", 4.0)
        .add_edge("start", "finish", 2.0);
    generate_layout(
        Canvas::new(400, 300).unwrap(),
        &g,
        &mut StdRng::seed_from_u64(3),
    )
    .unwrap()
}

#[test]
fn one_handle_per_link_and_point() {
    let layout = layout();
    let style = RenderStyle::default();
    let mut scene = Scene::new(Canvas::new(400, 300).unwrap(), style.background);
    let drawn = draw_layout(&mut scene, &layout, &style);

    assert_eq!(drawn.edges.len(), 3);
    assert_eq!(drawn.vertices.len(), 3);
    assert_eq!(drawn.edges.between("A", "finish").count(), 1);
    assert_eq!(drawn.vertices.named("start").count(), 1);
}

#[test]
fn drawn_geometry_matches_the_layout() {
    let layout = layout();
    let style = RenderStyle::default();
    let mut scene = Scene::new(Canvas::new(400, 300).unwrap(), style.background);
    let drawn = draw_layout(&mut scene, &layout, &style);
    let frame = scene.snapshot();

    let handle = drawn.edges.between("A", "finish").next().unwrap();
    let edge = &frame.edges[handle.id.0 as usize];
    assert_eq!(edge.from, layout.point("A").unwrap().pos());
    assert_eq!(edge.to, layout.point("finish").unwrap().pos());
    assert_eq!(edge.attrs.stroke_width, 10.0);

    let handle = drawn.vertices.named("start").next().unwrap();
    let vertex = &frame.vertices[handle.id.0 as usize];
    assert_eq!(vertex.center, layout.point("start").unwrap().pos());
    assert_eq!(vertex.attrs.radius, 10.0);
    assert_eq!(frame.time, Millis::ZERO);
}
