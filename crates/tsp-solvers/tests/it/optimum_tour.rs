//! End-to-end checks that run a parsed instance file all the way through `optimum_tour`, the way
//! the teacher's own `tsp-solvers` integration suite parses a real instance before solving it.

use std::io::Write;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;
use tsp_core::Edge;
use tsp_solvers::optimum_tour;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn tour_weight(edges: &[Edge]) -> u64 {
    edges.iter().map(Edge::weight).sum()
}

#[test]
fn optimum_tour_on_a_parsed_edge_list_matches_the_triangle_example() {
    let file = write_temp("3 3\n0 1 1\n1 2 1\n0 2 1\n");
    let graph = tsp_parser::read_edge_list(file.path()).unwrap();

    let mut rng = StdRng::seed_from_u64(1);
    let tour = optimum_tour(&graph, &mut rng);

    assert_eq!(tour.len(), 3);
    assert_eq!(tour_weight(&tour), 3);
}

#[test]
fn optimum_tour_on_a_parsed_geo_file_matches_the_unit_square_example() {
    let file = write_temp("4\n0 0\n1 0\n1 1\n0 1\n");
    let graph = tsp_parser::read_geo(file.path()).unwrap();

    let mut rng = StdRng::seed_from_u64(1);
    let tour = optimum_tour(&graph, &mut rng);

    assert_eq!(tour.len(), 4);
    assert_eq!(tour_weight(&tour), 4);
}

#[test]
fn optimum_tour_on_a_parsed_geo_file_matches_the_line_embedded_points_example() {
    let file = write_temp("5\n0 0\n10 0\n20 0\n30 0\n40 0\n");
    let graph = tsp_parser::read_geo(file.path()).unwrap();

    let mut rng = StdRng::seed_from_u64(1);
    let tour = optimum_tour(&graph, &mut rng);

    assert_eq!(tour.len(), 5);
    assert_eq!(tour_weight(&tour), 80);
}
