//! Branch selection, branch-and-bound search, and the top-level `optimum_tour` orchestration.

use std::time::Instant;

use rand::Rng;
use tsp_core::{Edge, Graph, INVALID_ID};

use crate::lp_model::{BranchMark, LpModel, LpSolveResult, LP_EPSILON, SELECT_EDGE_LB};
use crate::nna::upper_bound;

/// Picks the smallest-identifier fractional edge with no active branching constraint, or
/// [`tsp_core::INVALID_ID`] if every edge is either integral or already constrained.
fn edge_to_branch(model: &LpModel, values: &[f64]) -> i64 {
    for (edge, &value) in values.iter().enumerate() {
        let fractional = value > LP_EPSILON && value < SELECT_EDGE_LB;
        if fractional && model.mark(edge) == BranchMark::None {
            return edge as i64;
        }
    }
    INVALID_ID
}

/// Whether every node has exactly two selected edges. Assumes `values` is already connected.
fn is_tour(graph: &Graph, values: &[f64]) -> bool {
    let mut degree = vec![0u32; graph.node_count()];
    for edge in graph.edges() {
        if values[edge.id()] >= SELECT_EDGE_LB {
            degree[edge.source()] += 1;
            degree[edge.destination()] += 1;
        }
    }
    degree.iter().all(|&d| d == 2)
}

struct SearchState {
    tval: f64,
    best_sol_vals: Option<Vec<f64>>,
}

/// Recursive depth-first branch-and-bound over fractional edges. `depth` counts nesting; the
/// search stops descending once `depth > graph.edge_count()`, a safety bound that can never be hit
/// for sound inputs.
fn branch_and_bound(graph: &Graph, model: &LpModel, state: &mut SearchState, depth: usize) {
    if depth > graph.edge_count() {
        log::trace!("branch_and_bound: depth {depth} exceeded edge count, aborting (safety bound)");
        return;
    }

    let solved = model.connect(graph);
    let LpSolveResult::Optimal { objective, values } = solved else {
        log::trace!("branch_and_bound: depth {depth} infeasible, pruning");
        return;
    };

    if objective > state.tval {
        log::trace!(
            "branch_and_bound: depth {depth} bound {objective} exceeds incumbent {}, pruning",
            state.tval
        );
        return;
    }

    let branch_edge = edge_to_branch(model, &values);
    if branch_edge == INVALID_ID {
        if is_tour(graph, &values) {
            log::debug!("branch_and_bound: depth {depth} new incumbent {objective}");
            state.tval = objective;
            state.best_sol_vals = Some(values);
        } else {
            log::trace!("branch_and_bound: depth {depth} integral but not connected as a tour");
        }
        return;
    }
    let branch_edge = branch_edge as usize;

    log::trace!("branch_and_bound: depth {depth} branching on edge {branch_edge}");
    {
        let _guard = model.push_branch(branch_edge, BranchMark::Select);
        branch_and_bound(graph, model, state, depth + 1);
    }
    {
        let _guard = model.push_branch(branch_edge, BranchMark::Ignore);
        branch_and_bound(graph, model, state, depth + 1);
    }
}

/// Solves `graph` exactly, returning the edges of an optimal Hamiltonian cycle.
///
/// `rng` drives the nearest-neighbor heuristic's random start node (§4.3); callers seed it from
/// whatever seed source they use (e.g. the CLI's `-s` flag) so a run is reproducible end to end.
///
/// Returns an empty vector if no feasible tour was found within the search (e.g. the graph has no
/// Hamiltonian cycle); the caller is responsible for treating that as a reporting concern rather
/// than a fabricated answer.
pub fn optimum_tour(graph: &Graph, rng: &mut impl Rng) -> Vec<Edge> {
    let start = Instant::now();
    log::info!(
        "optimum_tour: starting on a graph with {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let model = LpModel::new(graph);
    let sorted_adjacency = graph.sorted_adjacency();

    let tval = upper_bound(&sorted_adjacency, rng);
    log::debug!("optimum_tour: nearest-neighbor upper bound = {tval}");

    let mut state = SearchState {
        tval,
        best_sol_vals: None,
    };
    branch_and_bound(graph, &model, &mut state, 0);

    let tour: Vec<Edge> = match &state.best_sol_vals {
        Some(values) => graph
            .edges()
            .iter()
            .copied()
            .filter(|e| values[e.id()] >= SELECT_EDGE_LB)
            .collect(),
        None => Vec::new(),
    };

    log::info!(
        "optimum_tour: finished in {:.2?}, tour value {}",
        start.elapsed(),
        state.tval
    );
    tour
}
