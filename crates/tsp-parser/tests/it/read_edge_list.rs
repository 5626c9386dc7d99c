use std::io::Write;

use tempfile::NamedTempFile;
use tsp_core::GraphError;
use tsp_parser::{read_edge_list, ParserError};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn reads_triangle_edge_list() {
    let file = write_temp("3 3\n0 1 1\n1 2 1\n0 2 1\n");
    let graph = read_edge_list(file.path()).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert!(!graph.is_geo());
    assert_eq!(graph.total_weight(), 3);
}

#[test]
fn rejects_edge_count_mismatch() {
    let file = write_temp("3 3\n0 1 1\n1 2 1\n");
    let err = read_edge_list(file.path()).unwrap_err();
    assert!(matches!(err, ParserError::WrongLineCount { .. }));
}

#[test]
fn rejects_out_of_range_vertex_id() {
    let file = write_temp("2 1\n0 5 1\n");
    let err = read_edge_list(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ParserError::Graph(GraphError::NodeOutOfRange { .. })
    ));
}

#[test]
fn blank_lines_between_edges_are_ignored() {
    let file = write_temp("3 3\n0 1 1\n\n1 2 1\n\n0 2 1\n");
    let graph = read_edge_list(file.path()).unwrap();
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn missing_file_surfaces_as_an_io_error() {
    let err = read_edge_list("/no/such/path/instance.txt").unwrap_err();
    assert!(matches!(err, ParserError::Io(_)));
}
