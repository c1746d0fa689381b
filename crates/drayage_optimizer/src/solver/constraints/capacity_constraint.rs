use crate::{
    problem::{job::Job, routing_problem::RoutingProblem},
    solver::{insertion::Insertion, solution::working_solution::WorkingSolution},
};

/// Rejects insertions that would push the running load of the target route
/// over its vehicle's capacity at any point along the tour.
#[derive(Clone, Copy, Debug, Default)]
pub struct CapacityConstraint;

impl CapacityConstraint {
    pub fn can_insert(
        &self,
        problem: &RoutingProblem,
        solution: &WorkingSolution,
        insertion: &Insertion,
    ) -> bool {
        let route = solution.route(insertion.route_id());

        match insertion {
            Insertion::Service(context) => {
                debug_assert!(matches!(problem.job(context.job_id), Job::Service(_)));
                route.can_insert_service(problem, context.job_id, context.position)
            }
            Insertion::Shipment(context) => route.can_insert_shipment(
                problem,
                context.job_id,
                context.pickup_position,
                context.delivery_position,
            ),
        }
    }
}
