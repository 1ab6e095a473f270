use super::*;

#[test]
fn parse_triangle() {
    let g = GraphMatrix::parse("0,1,1\n1,0,1\n1,1,0").unwrap();
    assert_eq!(g.size(), 3);
    assert!(g.has_edge(0, 1) && g.has_edge(2, 0));
    assert!(!g.has_edge(1, 1));
    assert!(g.is_symmetric());
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn parse_tolerates_whitespace_and_crlf() {
    let g = GraphMatrix::parse("  0, 1\r\n1 ,0 \n").unwrap();
    assert_eq!(g, GraphMatrix::from_edges(2, &[(0, 1)]).unwrap());
}

#[test]
fn blank_text_is_empty_graph() {
    for text in ["", "   ", "\n\n"] {
        let g = GraphMatrix::parse(text).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.to_csv(), "");
    }
}

#[test]
fn parse_rejects_non_square() {
    let err = GraphMatrix::parse("0,1,0\n1,0").unwrap_err();
    assert_eq!(
        err,
        MatrixError::NotSquare {
            row: 0,
            len: 3,
            expected: 2
        }
    );
}

#[test]
fn parse_rejects_bad_cells() {
    let err = GraphMatrix::parse("0,2\n1,0").unwrap_err();
    assert!(matches!(err, MatrixError::BadCell { row: 0, col: 1, ref token } if token == "2"));
    let err = "0,1\n1,".parse::<GraphMatrix>().unwrap_err();
    assert!(matches!(err, MatrixError::BadCell { row: 1, col: 1, .. }));
    assert!(err.to_string().contains("expected 0 or 1"));
}

#[test]
fn csv_round_trip_keeps_asymmetric_cells() {
    let text = "0,1,0\n0,0,1\n1,0,0";
    let g: GraphMatrix = text.parse().unwrap();
    assert!(!g.is_symmetric());
    assert_eq!(g.to_string(), text);
}

#[test]
fn from_rows_validates() {
    let ok = GraphMatrix::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
    assert_eq!(ok, GraphMatrix::complete(2));
    assert!(matches!(
        GraphMatrix::from_rows(&[vec![0, 1], vec![3, 0]]),
        Err(MatrixError::BadCell { row: 1, col: 0, .. })
    ));
    assert!(matches!(
        GraphMatrix::from_rows(&[vec![0, 1, 1], vec![1, 0]]),
        Err(MatrixError::NotSquare { .. })
    ));
}

#[test]
fn from_edges_rejects_unknown_vertex() {
    assert_eq!(
        GraphMatrix::from_edges(3, &[(0, 3)]).unwrap_err(),
        MatrixError::VertexOutOfRange { vertex: 3, size: 3 }
    );
}

#[test]
fn neighbors_are_ascending_and_degree_skips_loops() {
    let mut g = GraphMatrix::from_edges(5, &[(2, 4), (2, 0), (2, 3)]).unwrap();
    g.connect(2, 2);
    assert_eq!(g.neighbors(2).collect::<Vec<_>>(), vec![0, 2, 3, 4]);
    assert_eq!(g.degree(2), 3);
    assert_eq!(g.degree(1), 0);
}
