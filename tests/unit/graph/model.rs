use super::*;
use serde_json::json;

fn sample() -> Graph {
    let mut g = Graph::new();
    g.add_edge("start", "A", 6.0)
        .add_edge("start", "B", 2.0)
        .add_edge("B", "A", 3.0)
        .add_edge("A", "finish", 1.0)
        .add_edge("B", "finish", 5.0);
    g
}

#[test]
fn add_edge_registers_both_endpoints() {
    let g = sample();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 5);
    assert!(g.contains("finish"));
    assert_eq!(g.neighbors("finish").count(), 0);
    assert_eq!(g.weight("B", "A"), Some(3.0));
    assert_eq!(g.weight("A", "B"), None);
}

#[test]
fn max_weight_spans_all_nodes() {
    assert_eq!(sample().max_weight(), Some(6.0));

    let mut lonely = Graph::new();
    lonely.add_node("start").add_node("finish");
    assert_eq!(lonely.max_weight(), None);
}

#[test]
fn json_shape_is_a_plain_adjacency_object() {
    let g: Graph = serde_json::from_value(json!({
        "start": {"A": 1, "B": 2.5},
        "A": {"finish": 1},
        "B": {},
        "finish": {}
    }))
    .unwrap();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.weight("start", "B"), Some(2.5));

    let back = serde_json::to_value(&g).unwrap();
    assert_eq!(back["A"]["finish"], json!(1.0));
}

#[test]
fn validate_rejects_bad_weights_and_dangling_neighbors() {
    assert!(sample().validate().is_ok());

    let mut negative = sample();
    negative.add_edge("A", "B", -1.0);
    assert!(matches!(negative.validate(), Err(PathglowError::Graph(_))));

    let mut nan = sample();
    nan.add_edge("A", "B", f64::NAN);
    assert!(nan.validate().is_err());

    let dangling: Graph = serde_json::from_value(json!({"start": {"ghost": 1}})).unwrap();
    let err = dangling.validate().unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn edges_are_listed_parent_major() {
    let g = sample();
    let edges: Vec<_> = g.edges().map(|(p, c, _)| format!("{p}->{c}")).collect();
    assert_eq!(
        edges,
        vec!["A->finish", "B->A", "B->finish", "start->A", "start->B"]
    );
}
