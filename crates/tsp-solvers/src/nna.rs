//! Nearest-neighbor primal heuristic, used to seed the branch-and-bound incumbent.

use rand::Rng;
use tsp_core::Edge;

/// Runs the nearest-neighbor construction from `start` over `sorted_adjacency` (one entry per
/// node, incident edges sorted by weight ascending). Returns `None` if no tour could be closed —
/// either a dead end was hit before visiting every node, or no edge led back to `start`.
pub fn nna(sorted_adjacency: &[Vec<Edge>], start: usize) -> Option<u64> {
    let node_count = sorted_adjacency.len();
    let mut visited = vec![false; node_count];
    visited[start] = true;

    let mut cost = 0u64;
    let mut current = start;
    let mut visited_count = 1;

    for _ in 0..node_count {
        let Some(next_edge) = sorted_adjacency[current]
            .iter()
            .find(|e| !visited[e.other_endpoint(current)])
        else {
            break;
        };
        let next = next_edge.other_endpoint(current);
        cost += next_edge.weight();
        visited[next] = true;
        visited_count += 1;
        current = next;
    }

    let closing_edge = sorted_adjacency[current]
        .iter()
        .find(|e| e.other_endpoint(current) == start);

    match closing_edge {
        Some(e) if visited_count == node_count => Some(cost + e.weight()),
        _ => None,
    }
}

/// Picks a random start node and runs [`nna`] from it, returning `+inf` if no tour was found.
pub fn upper_bound(sorted_adjacency: &[Vec<Edge>], rng: &mut impl Rng) -> f64 {
    let start = rng.random_range(0..sorted_adjacency.len());
    match nna(sorted_adjacency, start) {
        Some(cost) => cost as f64,
        None => f64::INFINITY,
    }
}
