use std::io::Write;

use tempfile::NamedTempFile;
use tsp_parser::{read_geo, ParserError};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn reads_unit_square_geo() {
    let file = write_temp("4\n0 0\n1 0\n1 1\n0 1\n");
    let graph = read_geo(file.path()).unwrap();
    assert!(graph.is_geo());
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn edge_weights_are_rounded_euclidean_distances() {
    let file = write_temp("2\n0 0\n3 4\n");
    let graph = read_geo(file.path()).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges()[0].weight(), 5);
}

#[test]
fn malformed_header_is_reported() {
    let file = write_temp("not-a-number\n");
    let err = read_geo(file.path()).unwrap_err();
    assert!(matches!(err, ParserError::MalformedHeader(_)));
}

#[test]
fn rejects_too_few_coordinate_lines() {
    let file = write_temp("4\n0 0\n1 0\n");
    let err = read_geo(file.path()).unwrap_err();
    assert!(matches!(err, ParserError::WrongLineCount { .. }));
}
