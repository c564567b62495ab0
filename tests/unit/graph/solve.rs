use super::*;

fn diamond() -> Graph {
    let mut g = Graph::new();
    g.add_edge("start", "A", 6.0)
        .add_edge("start", "B", 2.0)
        .add_edge("B", "A", 3.0)
        .add_edge("A", "finish", 1.0)
        .add_edge("B", "finish", 5.0);
    g
}

#[test]
fn dijkstra_returns_finish_first() {
    let solved = DijkstraSolver.solve(&diamond(), "start", "finish").unwrap();
    assert_eq!(solved.path, vec!["finish", "A", "B", "start"]);
}

#[test]
fn dijkstra_respects_edge_direction() {
    let mut g = Graph::new();
    g.add_edge("finish", "start", 1.0);
    let err = DijkstraSolver.solve(&g, "start", "finish").unwrap_err();
    assert!(matches!(err, PathglowError::Solver(_)));
}

#[test]
fn dijkstra_rejects_unknown_endpoints() {
    let err = DijkstraSolver
        .solve(&diamond(), "start", "nowhere")
        .unwrap_err();
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn same_start_and_finish_is_a_single_node_route() {
    let solved = DijkstraSolver.solve(&diamond(), "B", "B").unwrap();
    assert_eq!(solved.path, vec!["B"]);
}

#[test]
fn closures_are_solvers() {
    let fixed = |_: &Graph, start: &str, finish: &str| -> PathglowResult<SolvedPath> {
        Ok(SolvedPath::from_walk([start, "A", finish]))
    };
    let solved = fixed.solve(&diamond(), "start", "finish").unwrap();
    assert_eq!(solved.path, vec!["finish", "A", "start"]);
}
