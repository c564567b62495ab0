use super::*;

#[test]
fn edge_width_and_color_follow_the_weight() {
    let style = RenderStyle::default();

    let light = style.edge_attrs(0.0);
    assert_eq!(light.stroke_width, 1.0);
    assert_eq!(light.stroke.to_hex(), "#008000");

    let heavy = style.edge_attrs(1.0);
    assert_eq!(heavy.stroke_width, 10.0);
    assert_eq!(heavy.stroke.to_hex(), "#ff0000");

    assert_eq!(style.edge_attrs(0.5).stroke_width, 5.5);
}

#[test]
fn out_of_range_weights_are_clamped() {
    let style = RenderStyle::default();
    assert_eq!(style.edge_attrs(7.0).stroke_width, 10.0);
    assert_eq!(style.edge_attrs(-1.0).stroke_width, 1.0);
    assert_eq!(style.edge_attrs(f64::NAN).stroke_width, 1.0);
}

#[test]
fn endpoints_get_larger_markers() {
    let style = RenderStyle::default();
    assert_eq!(style.vertex_attrs("start").radius, 10.0);
    assert_eq!(style.vertex_attrs("finish").radius, 10.0);
    assert_eq!(style.vertex_attrs("A").radius, 5.0);
    assert_eq!(style.vertex_attrs("A").fill, Color::WHITE);
}

#[test]
fn partial_json_keeps_defaults() {
    let style: RenderStyle =
        serde_json::from_str(r##"{"highlight_color": "#00f", "node_radius": 3}"##).unwrap();
    assert_eq!(style.highlight_color.to_hex(), "#0000ff");
    assert_eq!(style.node_radius, 3.0);
    assert_eq!(style.edge_width_range, [1.0, 10.0]);
}
