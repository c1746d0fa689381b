use std::sync::Arc;

use tracing::debug;

use crate::{
    problem::routing_problem::RoutingProblem,
    solver::{
        constraints::constraint::default_constraints,
        recreate::{
            cheapest_insertion::CheapestInsertion, recreate_context::RecreateContext,
            recreate_solution::RecreateSolution,
        },
        solution::working_solution::WorkingSolution,
    },
};

/// Builds the initial solution by cheapest insertion from an empty plan.
/// Jobs that cannot be placed anywhere remain unassigned.
pub fn construct_solution(problem: Arc<RoutingProblem>) -> WorkingSolution {
    let constraints = default_constraints();
    let mut solution = WorkingSolution::new(Arc::clone(&problem));

    let context = RecreateContext {
        problem: &problem,
        constraints: &constraints,
    };
    CheapestInsertion.recreate_solution(&mut solution, &context);

    debug!(
        assigned = solution.assigned_count(),
        unassigned = solution.unassigned_jobs().len(),
        routes = solution.non_empty_routes_count(),
        cost = solution.total_cost(),
        "constructed initial solution"
    );

    solution
}
