use crate::{
    problem::{
        job::{ActivityId, Job},
        location::LocationIdx,
        routing_problem::{Cost, RoutingProblem},
    },
    solver::{insertion::Insertion, solution::route::Route, solution::working_solution::WorkingSolution},
};

fn location_before(problem: &RoutingProblem, route: &Route, position: usize) -> LocationIdx {
    if position == 0 {
        problem.vehicle(route.vehicle_id()).start_location_id()
    } else {
        problem.activity_location_id(route.activity(position - 1))
    }
}

fn location_after(problem: &RoutingProblem, route: &Route, position: usize) -> LocationIdx {
    if position == route.len() {
        problem.vehicle(route.vehicle_id()).end_location_id()
    } else {
        problem.activity_location_id(route.activity(position))
    }
}

/// Detour distance for splicing one stop into the leg at `position`.
fn splice_distance(
    problem: &RoutingProblem,
    route: &Route,
    position: usize,
    stop: LocationIdx,
) -> f64 {
    let prev = location_before(problem, route, position);
    let next = location_after(problem, route, position);

    problem.distance(prev, stop) + problem.distance(stop, next) - problem.distance(prev, next)
}

/// Marginal cost increase of applying the insertion: added distance times
/// the vehicle's cost-per-distance, plus the fixed cost when the insertion
/// opens an empty route. Pure; the solution is not touched.
pub fn insertion_delta_cost(solution: &WorkingSolution, insertion: &Insertion) -> Cost {
    let problem = solution.problem();
    let route = solution.route(insertion.route_id());
    let vehicle = problem.vehicle(route.vehicle_id());

    let added_distance = match insertion {
        Insertion::Service(context) => {
            let Job::Service(service) = problem.job(context.job_id) else {
                unreachable!("service insertion for non-service job");
            };
            splice_distance(problem, route, context.position, service.location_id())
        }
        Insertion::Shipment(context) => {
            let pickup = problem.activity_location_id(ActivityId::ShipmentPickup(context.job_id));
            let delivery =
                problem.activity_location_id(ActivityId::ShipmentDelivery(context.job_id));

            if context.pickup_position == context.delivery_position {
                // Both stops splice into the same leg, back to back.
                let prev = location_before(problem, route, context.pickup_position);
                let next = location_after(problem, route, context.pickup_position);

                problem.distance(prev, pickup)
                    + problem.distance(pickup, delivery)
                    + problem.distance(delivery, next)
                    - problem.distance(prev, next)
            } else {
                splice_distance(problem, route, context.pickup_position, pickup)
                    + splice_distance(problem, route, context.delivery_position, delivery)
            }
        }
    };

    let fixed_cost = if route.is_empty() { vehicle.fixed_cost() } else { 0.0 };

    added_distance * vehicle.cost_per_distance() + fixed_cost
}
