//! Graph, union-find and distance primitives shared by the traveling-crab exact TSP solver.
//!
//! This crate has no I/O and no knowledge of the LP solver; it only models the combinatorial
//! objects the rest of the workspace operates on.

pub mod distance;
pub mod graph;
pub mod union_find;

pub use distance::euclidean_distance;
pub use graph::{Edge, Graph, GraphError, Node};
pub use union_find::DisjointSets;

/// Sentinel value distinct from every real node/edge identifier.
pub const INVALID_ID: i64 = -1;
