use super::*;

fn point(name: &str, x: f64, y: f64) -> LayoutPoint {
    LayoutPoint {
        name: name.to_owned(),
        x,
        y,
    }
}

fn two_node_scene(transition: Transition) -> (Scene, EdgeId, VertexId) {
    let mut scene = Scene::new(Canvas::new(100, 100).unwrap(), Color::WHITE)
        .with_transition(transition);
    let link = Link {
        parent: "start".to_owned(),
        child: "finish".to_owned(),
        normalized_weight: 1.0,
    };
    let edge = scene.draw_line(
        &link,
        Point::new(10.0, 10.0),
        Point::new(90.0, 90.0),
        EdgeAttrs {
            stroke: Color::BLACK,
            stroke_width: 1.0,
        },
    );
    let vertex = scene.draw_circle(
        &point("start", 10.0, 10.0),
        VertexAttrs {
            fill: Color::WHITE,
            stroke: Color::BLACK,
            radius: 10.0,
        },
    );
    (scene, edge, vertex)
}

#[test]
fn shapes_move_from_idle_to_scheduled_to_highlighted() {
    let (mut scene, edge, vertex) = two_node_scene(Transition::default());
    assert_eq!(scene.edge_state(edge), Some(ShapeState::Idle));

    scene.schedule(
        Target::Edge(edge),
        Millis(500),
        AttrChange::default().stroke_width(5.0),
    );
    scene.schedule(
        Target::Vertex(vertex),
        Millis(0),
        AttrChange::default().fill(Color::BLACK),
    );
    assert_eq!(scene.edge_state(edge), Some(ShapeState::Scheduled(Millis(500))));
    assert_eq!(scene.pending(), 2);

    assert_eq!(scene.advance_to(Millis(100)).unwrap(), 1);
    assert_eq!(
        scene.vertex_state(vertex),
        Some(ShapeState::Highlighted(Millis(0)))
    );
    assert_eq!(scene.edge_state(edge), Some(ShapeState::Scheduled(Millis(500))));

    assert_eq!(scene.advance_to(Millis(500)).unwrap(), 1);
    assert_eq!(
        scene.edge_state(edge),
        Some(ShapeState::Highlighted(Millis(500)))
    );
}

#[test]
fn committed_changes_tween_over_the_transition() {
    let (mut scene, edge, _) = two_node_scene(Transition {
        duration: Millis(100),
        ease: Ease::Linear,
    });
    scene.schedule(
        Target::Edge(edge),
        Millis(0),
        AttrChange::default().stroke_width(5.0),
    );

    scene.advance_to(Millis(50)).unwrap();
    let mid = scene.snapshot().edges[0].attrs.stroke_width;
    assert!((mid - 3.0).abs() < 1e-9, "got {mid}");

    scene.advance_to(Millis(100)).unwrap();
    assert_eq!(scene.snapshot().edges[0].attrs.stroke_width, 5.0);
}

#[test]
fn highlights_persist_and_finish_runs_to_the_end() {
    let (mut scene, edge, vertex) = two_node_scene(Transition::default());
    scene.schedule(
        Target::Edge(edge),
        Millis(1000),
        AttrChange::default().stroke_width(5.0),
    );
    scene.schedule(
        Target::Vertex(vertex),
        Millis(1000),
        AttrChange::default().fill(Color::BLACK),
    );
    assert_eq!(scene.end_time(), Millis(1250));

    let end = scene.finish().unwrap();
    assert_eq!(end, Millis(1250));
    assert_eq!(scene.pending(), 0);

    let frame = scene.snapshot();
    assert_eq!(frame.edges[0].attrs.stroke_width, 5.0);
    assert_eq!(frame.vertices[0].attrs.fill, Color::BLACK);
    assert_eq!(frame.vertices[0].attrs.radius, 10.0);
}

#[test]
fn schedule_report_lists_labels_in_order() {
    let (mut scene, edge, vertex) = two_node_scene(Transition::default());
    scene.schedule(
        Target::Vertex(vertex),
        Millis(500),
        AttrChange::default().fill(Color::BLACK),
    );
    scene.schedule(
        Target::Edge(edge),
        Millis(0),
        AttrChange::default().stroke_width(5.0),
    );

    let report = scene.schedule_report();
    let labels: Vec<_> = report.iter().map(|c| (c.at, c.label.as_str())).collect();
    assert_eq!(
        labels,
        vec![(Millis(0), "start->finish"), (Millis(500), "start")]
    );
}

#[test]
fn unknown_targets_are_dropped() {
    let (mut scene, _, _) = two_node_scene(Transition::default());
    scene.schedule(
        Target::Vertex(VertexId(42)),
        Millis(0),
        AttrChange::default(),
    );
    assert_eq!(scene.pending(), 0);
}
