//! The degree-2 LP relaxation, subtour-elimination cut separation, and the scoped branching
//! constraints layered on top of it.

use std::cell::RefCell;
use std::collections::BTreeMap;

use good_lp::{variable, Expression, ProblemVariables, Solution, SolverModel, Variable};
use tsp_core::{DisjointSets, Graph};

/// Numerical tolerance for comparing LP values to 0 and 1.
pub const LP_EPSILON: f64 = 1e-8;
/// Threshold above which a variable is treated as effectively selected (1).
pub const SELECT_EDGE_LB: f64 = 1.0 - LP_EPSILON;
/// Threshold below which a variable is treated as effectively excluded (0).
pub const IGNORE_EDGE_UB: f64 = LP_EPSILON;

/// Which way, if any, branching has currently constrained a given edge variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchMark {
    None,
    Select,
    Ignore,
}

/// Outcome of solving the current relaxation.
pub enum LpSolveResult {
    Optimal { objective: f64, values: Vec<f64> },
    Infeasible,
}

/// The degree-2 LP relaxation of a TSP instance: one variable per edge, a degree-2 equality per
/// node, a growing set of subtour-elimination cuts, and the currently active branching
/// constraints.
///
/// Cuts and branch marks live behind [`RefCell`] so that [`BranchGuard`] can hold a plain shared
/// reference to the model across the recursive branch-and-bound call it scopes, rather than a
/// mutable borrow that would make the recursive call itself impossible to express.
pub struct LpModel {
    weights: Vec<u64>,
    incidence: Vec<Vec<usize>>,
    cuts: RefCell<Vec<Vec<usize>>>,
    marks: RefCell<Vec<BranchMark>>,
}

impl LpModel {
    /// Builds the initial (cut-free, unbranched) model for `graph`.
    pub fn new(graph: &Graph) -> Self {
        let weights = graph.edges().iter().map(|e| e.weight()).collect();
        let mut incidence = vec![Vec::new(); graph.node_count()];
        for edge in graph.edges() {
            incidence[edge.source()].push(edge.id());
            incidence[edge.destination()].push(edge.id());
        }
        let marks = vec![BranchMark::None; graph.edge_count()];

        Self {
            weights,
            incidence,
            cuts: RefCell::new(Vec::new()),
            marks: RefCell::new(marks),
        }
    }

    pub fn num_edges(&self) -> usize {
        self.weights.len()
    }

    pub fn mark(&self, edge: usize) -> BranchMark {
        self.marks.borrow()[edge]
    }

    /// Sets `constraints[edge]` and returns a guard that resets it back to `None` when dropped.
    ///
    /// Mirrors the scoped add/remove of a branching constraint described in the search design:
    /// the constraint is active for exactly the lifetime of the guard, including every early
    /// return inside that lifetime (prune, infeasibility, or an integral leaf).
    pub fn push_branch(&self, edge: usize, mark: BranchMark) -> BranchGuard<'_> {
        self.marks.borrow_mut()[edge] = mark;
        BranchGuard { model: self, edge }
    }

    /// Number of cuts currently registered, for invariant checks in tests.
    pub fn cut_count(&self) -> usize {
        self.cuts.borrow().len()
    }

    /// Registers a subtour-elimination cut over the given edge ids: `sum(x_e for e in edges) >=
    /// 2`. Cuts are global and, once added, remain for the rest of the search.
    fn add_cut(&self, edges: Vec<usize>) {
        self.cuts.borrow_mut().push(edges);
    }

    /// Solves the current relaxation (base degree constraints + accumulated cuts + active branch
    /// marks) from scratch.
    ///
    /// `good_lp` builds and solves an immutable problem in one shot rather than exposing a live
    /// mutable instance with incremental constraint removal, so "add and later remove a
    /// constraint" is implemented at this level: every call rebuilds a fresh `good_lp` problem
    /// from the model's current state.
    pub fn solve(&self) -> LpSolveResult {
        let mut vars = ProblemVariables::new();
        let xs: Vec<Variable> = (0..self.weights.len())
            .map(|i| vars.add(variable().min(0.0).max(1.0).name(format!("x{i}"))))
            .collect();

        let objective = weighted_sum(&xs, &self.weights);

        let mut problem = vars.minimise(objective).using(good_lp::microlp);

        for incident in &self.incidence {
            let degree = sum_of(incident.iter().map(|&e| xs[e]));
            problem = problem.with(degree.eq(2.0));
        }
        for cut in self.cuts.borrow().iter() {
            let expr = sum_of(cut.iter().map(|&e| xs[e]));
            problem = problem.with(expr.geq(2.0));
        }
        for (edge, mark) in self.marks.borrow().iter().enumerate() {
            match mark {
                BranchMark::Select => {
                    problem = problem.with(Expression::from(xs[edge]).geq(SELECT_EDGE_LB));
                }
                BranchMark::Ignore => {
                    problem = problem.with(Expression::from(xs[edge]).leq(IGNORE_EDGE_UB));
                }
                BranchMark::None => {}
            }
        }

        match problem.solve() {
            Ok(solution) => {
                let values: Vec<f64> = xs.iter().map(|&x| solution.value(x)).collect();
                let objective = values
                    .iter()
                    .zip(&self.weights)
                    .map(|(v, w)| v * (*w as f64))
                    .sum();
                LpSolveResult::Optimal { objective, values }
            }
            Err(_) => LpSolveResult::Infeasible,
        }
    }

    /// Iteratively separates subtour-elimination cuts until the LP solution is connected or
    /// infeasible, re-solving after each round of cuts added.
    pub fn connect(&self, graph: &Graph) -> LpSolveResult {
        let mut round = 0usize;
        loop {
            let solved = self.solve();
            let LpSolveResult::Optimal { objective, values } = solved else {
                log::trace!("connect: round {round} infeasible");
                return LpSolveResult::Infeasible;
            };

            let mut islands = DisjointSets::new(graph.node_count());
            let mut not_selected = Vec::new();
            for edge in graph.edges() {
                if values[edge.id()] > LP_EPSILON {
                    islands.merge(edge.source(), edge.destination());
                } else {
                    not_selected.push(*edge);
                }
            }

            if islands.count() == 1 {
                log::trace!("connect: round {round} connected, objective {objective}");
                return LpSolveResult::Optimal { objective, values };
            }

            let mut by_island: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
            for edge in &not_selected {
                let src_root = islands.find(edge.source());
                let dst_root = islands.find(edge.destination());
                if src_root != dst_root {
                    by_island.entry(src_root).or_default().push(edge.id());
                    by_island.entry(dst_root).or_default().push(edge.id());
                }
            }

            log::debug!(
                "connect: round {round} found {} islands, adding {} subtour cuts",
                islands.count(),
                by_island.len()
            );
            for (_, edges) in by_island {
                self.add_cut(edges);
            }
            round += 1;
        }
    }
}

fn sum_of(vars: impl IntoIterator<Item = Variable>) -> Expression {
    vars.into_iter()
        .fold(Expression::from(0.0), |acc, v| acc + v)
}

fn weighted_sum(vars: &[Variable], weights: &[u64]) -> Expression {
    vars.iter()
        .zip(weights)
        .fold(Expression::from(0.0), |acc, (&v, &w)| acc + (w as f64) * v)
}

/// Scoped release of a single branching constraint, returned by [`LpModel::push_branch`].
pub struct BranchGuard<'a> {
    model: &'a LpModel,
    edge: usize,
}

impl Drop for BranchGuard<'_> {
    fn drop(&mut self) {
        self.model.marks.borrow_mut()[self.edge] = BranchMark::None;
    }
}
