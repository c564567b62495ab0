use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn chain() -> Graph {
    let mut g = Graph::new();
    g.add_edge("start", "A", 2.0)
        .add_edge("A", "B", 8.0)
        .add_edge("B", "finish", 4.0)
        .add_edge("start", "finish", 0.0);
    g
}

#[test]
fn one_point_per_node_inside_canvas() {
    let canvas = Canvas::new(300, 200).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let layout = generate_layout(canvas, &chain(), &mut rng).unwrap();

    assert_eq!(layout.points.len(), 4);
    for (key, p) in &layout.points {
        assert_eq!(key, &p.name);
        assert!(canvas.contains(p.pos()), "{p:?} escaped the canvas");
        assert_eq!(p.x, p.x.round());
        assert_eq!(p.y, p.y.round());
    }
}

#[test]
fn weights_are_normalized_by_the_heaviest_edge() {
    let mut rng = StdRng::seed_from_u64(1);
    let layout = generate_layout(Canvas::default(), &chain(), &mut rng).unwrap();
    assert_eq!(layout.links.len(), 4);

    let w = |p: &str, c: &str| {
        layout
            .links
            .iter()
            .find(|l| l.joins(p, c))
            .map(|l| l.normalized_weight)
            .unwrap()
    };
    assert_eq!(w("A", "B"), 1.0);
    assert_eq!(w("start", "A"), 0.25);
    assert_eq!(w("B", "finish"), 0.5);
    assert_eq!(w("start", "finish"), 0.0);
}

#[test]
fn same_seed_same_coordinates() {
    let canvas = Canvas::new(640, 480).unwrap();
    let a = generate_layout(canvas, &chain(), &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate_layout(canvas, &chain(), &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn all_zero_weights_do_not_produce_nan() {
    let mut g = Graph::new();
    g.add_edge("start", "finish", 0.0).add_edge("finish", "start", 0.0);
    let layout = generate_layout_unseeded(Canvas::default(), &g).unwrap();
    assert_eq!(layout.links.len(), 2);
    assert!(layout.links.iter().all(|l| l.normalized_weight == 0.0));
}

#[test]
fn edgeless_graph_has_points_but_no_links() {
    let mut g = Graph::new();
    g.add_node("start").add_node("finish");
    let layout = generate_layout_unseeded(Canvas::default(), &g).unwrap();
    assert_eq!(layout.points.len(), 2);
    assert!(layout.links.is_empty());
}

#[test]
fn self_loops_resolve_to_the_same_point() {
    let mut g = Graph::new();
    g.add_edge("A", "A", 3.0);
    let layout = generate_layout_unseeded(Canvas::default(), &g).unwrap();
    let (p, c) = layout.endpoints(&layout.links[0]).unwrap();
    assert_eq!(p.pos(), c.pos());
}

#[test]
fn dangling_neighbors_are_left_out() {
    let g: Graph = serde_json::from_str(r#"{"start": {"ghost": 1, "finish": 2}, "finish": {}}"#)
        .unwrap();
    let layout = generate_layout_unseeded(Canvas::default(), &g).unwrap();
    assert_eq!(layout.links.len(), 1);
    assert!(layout.links[0].joins("start", "finish"));
    assert_eq!(layout.links[0].normalized_weight, 1.0);
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let canvas = Canvas {
        width: 0,
        height: 10,
    };
    assert!(generate_layout_unseeded(canvas, &chain()).is_err());
}
