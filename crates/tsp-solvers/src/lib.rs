/*!
This crate provides the exact branch-and-bound Traveling Salesperson solver used by the rest of
the workspace.

## Call Structure of the Algorithm

The call structure of the algorithm and sub-methods is as follows. Indented functions indicate
that they are called by the function above them.

- `optimum_tour`: Main entry point. Builds the LP relaxation, seeds an incumbent via the
  nearest-neighbor heuristic, and kicks off the branch-and-bound search.
    - `nna`/`upper_bound`: Nearest-neighbor heuristic providing the initial incumbent.
    - `branch_and_bound`: Depth-first branch-and-bound search over fractional edges.
        - `connect`: Iteratively re-solves the LP and adds subtour-elimination cuts until the
          fractional solution is connected or infeasible.
        - `edge_to_branch`: Picks the next fractional edge to branch on.
        - `branch_and_bound`: Recurses on the select/ignore children of that edge.

See [`lp_model`] for the LP relaxation and cut separation, and [`nna`] for the primal heuristic.
*/

pub mod lp_model;
pub mod nna;
pub mod solver;

pub use nna::upper_bound;
pub use solver::optimum_tour;
