use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::info;

use crate::{
    problem::routing_problem::RoutingProblem,
    solver::{search::Search, solution::working_solution::WorkingSolution,
        solver_params::SolverParams},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SolverStatus {
    Pending,
    Running,
    Completed,
}

/// Owns one search over one problem. `solve` blocks until the search
/// terminates; `stop` may be called from another thread to end it early.
pub struct Solver {
    search: Search,
    status: RwLock<SolverStatus>,
}

impl Solver {
    pub fn new(problem: RoutingProblem, params: SolverParams) -> Self {
        Solver {
            search: Search::new(Arc::new(problem), params),
            status: RwLock::new(SolverStatus::Pending),
        }
    }

    pub fn solve(&self) {
        *self.status.write() = SolverStatus::Running;
        self.search.run();
        *self.status.write() = SolverStatus::Completed;

        info!(
            best_cost = self.search.best_cost(),
            "search completed"
        );
    }

    /// Raises the stop flag. The status stays `Running` until `solve`
    /// observes the flag and winds the trajectories down.
    pub fn stop(&self) {
        self.search.stop();
    }

    pub fn status(&self) -> SolverStatus {
        *self.status.read()
    }

    /// Solutions discovered so far, best first. May be consulted while
    /// the search is still running.
    pub fn solutions(&self) -> Vec<WorkingSolution> {
        self.search.solutions()
    }

    pub fn best_solution(&self) -> Option<WorkingSolution> {
        self.search.solutions().into_iter().next()
    }
}

/// Runs a full search and returns the discovered solutions, best first.
pub fn solve(problem: RoutingProblem, params: SolverParams) -> Vec<WorkingSolution> {
    let solver = Solver::new(problem, params);
    solver.solve();
    solver.solutions()
}

/// The lowest-cost solution of the slice. Ties fall to fewer unassigned
/// jobs, then fewer vehicles on the road.
pub fn best_of(solutions: &[WorkingSolution]) -> Option<&WorkingSolution> {
    solutions.iter().min_by(|a, b| {
        a.total_cost().total_cmp(&b.total_cost()).then_with(|| {
            a.unassigned_jobs()
                .len()
                .cmp(&b.unassigned_jobs().len())
                .then(a.non_empty_routes_count().cmp(&b.non_empty_routes_count()))
        })
    })
}
