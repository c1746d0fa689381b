use std::sync::Arc;

use fxhash::FxHashSet;
use rand::Rng;

use crate::{
    problem::{
        job::JobIdx,
        routing_problem::{Cost, RoutingProblem},
        vehicle::VehicleIdx,
    },
    solver::{
        insertion::Insertion,
        solution::{route::Route, route_id::RouteIdx},
    },
};

/// Mutable route/assignment state for one search trajectory. Every job id
/// is either assigned in exactly one route or present in `unassigned_jobs`.
/// Shared between trajectory threads once frozen into the best pool.
#[derive(Clone)]
pub struct WorkingSolution {
    problem: Arc<RoutingProblem>,
    routes: Vec<Route>,
    unassigned_jobs: FxHashSet<JobIdx>,
}

impl WorkingSolution {
    /// An empty solution: one route per fleet vehicle (per vehicle type
    /// under an infinite fleet) and every job unassigned.
    pub fn new(problem: Arc<RoutingProblem>) -> Self {
        let routes = (0..problem.vehicles().len())
            .map(|index| Route::empty(VehicleIdx::new(index)))
            .collect();
        let unassigned_jobs = problem.job_ids().collect();

        WorkingSolution {
            problem,
            routes,
            unassigned_jobs,
        }
    }

    pub fn problem(&self) -> &RoutingProblem {
        &self.problem
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, route_id: RouteIdx) -> &Route {
        &self.routes[route_id]
    }

    pub fn non_empty_routes_iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|route| !route.is_empty())
    }

    pub fn non_empty_routes_count(&self) -> usize {
        self.non_empty_routes_iter().count()
    }

    pub fn unassigned_jobs(&self) -> &FxHashSet<JobIdx> {
        &self.unassigned_jobs
    }

    /// Unassigned job ids in ascending order, for deterministic iteration.
    pub fn unassigned_jobs_sorted(&self) -> Vec<JobIdx> {
        self.problem
            .job_ids()
            .filter(|job_id| self.unassigned_jobs.contains(job_id))
            .collect()
    }

    /// Assigned job ids in ascending order.
    pub fn assigned_jobs(&self) -> Vec<JobIdx> {
        self.problem
            .job_ids()
            .filter(|job_id| !self.unassigned_jobs.contains(job_id))
            .collect()
    }

    pub fn assigned_count(&self) -> usize {
        self.problem.jobs().len() - self.unassigned_jobs.len()
    }

    pub fn route_of_job(&self, job_id: JobIdx) -> Option<RouteIdx> {
        let job = self.problem.job(job_id);
        self.routes
            .iter()
            .position(|route| {
                job.activity_ids(job_id)
                    .any(|activity_id| route.contains_activity(activity_id))
            })
            .map(RouteIdx::new)
    }

    pub fn random_assigned_job<R>(&self, rng: &mut R) -> Option<JobIdx>
    where
        R: Rng,
    {
        let assigned = self.assigned_jobs();
        if assigned.is_empty() {
            return None;
        }

        Some(assigned[rng.random_range(0..assigned.len())])
    }

    pub fn insert(&mut self, insertion: &Insertion) {
        let route = &mut self.routes[insertion.route_id()];
        let was_empty = route.is_empty();
        let vehicle_id = route.vehicle_id();

        match insertion {
            Insertion::Service(context) => {
                route.insert_service(&self.problem, context.job_id, context.position);
            }
            Insertion::Shipment(context) => {
                route.insert_shipment(
                    &self.problem,
                    context.job_id,
                    context.pickup_position,
                    context.delivery_position,
                );
            }
        }

        self.unassigned_jobs.remove(&insertion.job_id());

        if was_empty {
            self.create_additional_route(vehicle_id);
        }
    }

    /// Under an infinite fleet, filling a vehicle's last empty route makes
    /// a fresh copy of that vehicle type available.
    fn create_additional_route(&mut self, vehicle_id: VehicleIdx) {
        if !self.problem.fleet().is_infinite() {
            return;
        }

        let has_empty_route = self
            .routes
            .iter()
            .any(|route| route.vehicle_id() == vehicle_id && route.is_empty());

        if !has_empty_route {
            self.routes.push(Route::empty(vehicle_id));
        }
    }

    /// Moves the job back to the unassigned set, removing both shipment
    /// legs from its route. Returns false when the job was not assigned.
    pub fn remove_job(&mut self, job_id: JobIdx) -> bool {
        if self.unassigned_jobs.contains(&job_id) {
            return false;
        }

        let problem = Arc::clone(&self.problem);
        let removed = self
            .routes
            .iter_mut()
            .any(|route| route.remove_job(&problem, job_id));

        if removed {
            self.unassigned_jobs.insert(job_id);
        }

        removed
    }

    pub fn transport_cost(&self) -> Cost {
        self.routes
            .iter()
            .map(|route| route.cost(&self.problem))
            .sum()
    }

    /// Route costs plus the per-job penalty for everything unassigned, so
    /// partial solutions stay comparable.
    pub fn total_cost(&self) -> Cost {
        self.transport_cost()
            + self.problem.unassigned_penalty() * self.unassigned_jobs.len() as f64
    }

    /// Structural equality on route contents, used to keep the best pool
    /// free of duplicates.
    pub fn is_identical(&self, other: &WorkingSolution) -> bool {
        if self.routes.len() != other.routes.len() {
            return false;
        }

        self.routes.iter().zip(&other.routes).all(|(a, b)| {
            a.vehicle_id() == b.vehicle_id() && a.activity_ids() == b.activity_ids()
        })
    }

    /// Every job id in exactly one of {assigned, unassigned}, and feasible
    /// routes. Search invariant, checked by tests after every phase.
    pub fn is_consistent(&self) -> bool {
        let mut seen = FxHashSet::default();
        for route in &self.routes {
            for activity_id in route.activity_ids() {
                let job_id = activity_id.job_id();
                if self.unassigned_jobs.contains(&job_id) {
                    return false;
                }
                seen.insert(job_id);
            }
        }

        if seen.len() + self.unassigned_jobs.len() != self.problem.jobs().len() {
            return false;
        }

        self.routes.iter().all(|route| {
            route.is_capacity_feasible(&self.problem) && route.is_precedence_feasible()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        problem::job::ActivityId,
        solver::insertion::{Insertion, ShipmentInsertion},
        test_utils,
    };

    #[test]
    fn test_new_solution_has_all_jobs_unassigned() {
        let problem = Arc::new(test_utils::single_vehicle_shipment_problem(4.0));
        let solution = WorkingSolution::new(Arc::clone(&problem));

        assert_eq!(solution.unassigned_jobs().len(), problem.jobs().len());
        assert_eq!(solution.routes().len(), 1);
        assert!(solution.is_consistent());
    }

    #[test]
    fn test_insert_and_remove_job_roundtrip() {
        let problem = Arc::new(test_utils::single_vehicle_shipment_problem(4.0));
        let mut solution = WorkingSolution::new(Arc::clone(&problem));

        solution.insert(&Insertion::Shipment(ShipmentInsertion {
            route_id: RouteIdx::new(0),
            job_id: JobIdx::new(0),
            pickup_position: 0,
            delivery_position: 0,
        }));

        assert!(!solution.unassigned_jobs().contains(&JobIdx::new(0)));
        assert_eq!(solution.route_of_job(JobIdx::new(0)), Some(RouteIdx::new(0)));
        assert!(solution.is_consistent());

        assert!(solution.remove_job(JobIdx::new(0)));
        assert!(solution.unassigned_jobs().contains(&JobIdx::new(0)));
        assert_eq!(solution.route_of_job(JobIdx::new(0)), None);
        assert!(solution.is_consistent());

        assert!(!solution.remove_job(JobIdx::new(0)));
    }

    #[test]
    fn test_total_cost_counts_unassigned_penalty() {
        let problem = Arc::new(test_utils::single_vehicle_shipment_problem(4.0));
        let solution = WorkingSolution::new(Arc::clone(&problem));

        assert_eq!(
            solution.total_cost(),
            problem.unassigned_penalty() * problem.jobs().len() as f64
        );
    }

    #[test]
    fn test_unassigned_penalty_override_flows_into_total_cost() {
        let problem = Arc::new(
            test_utils::single_vehicle_shipment_problem(4.0).with_unassigned_penalty(1_000.0),
        );
        let solution = WorkingSolution::new(Arc::clone(&problem));

        assert_eq!(solution.total_cost(), 1_000.0 * problem.jobs().len() as f64);
    }

    #[test]
    fn test_cost_drops_when_a_job_gets_assigned() {
        let problem = Arc::new(test_utils::single_vehicle_shipment_problem(4.0));
        let mut solution = WorkingSolution::new(Arc::clone(&problem));
        let empty_cost = solution.total_cost();

        solution.insert(&Insertion::Shipment(ShipmentInsertion {
            route_id: RouteIdx::new(0),
            job_id: JobIdx::new(0),
            pickup_position: 0,
            delivery_position: 0,
        }));

        assert!(solution.total_cost() < empty_cost);
    }

    #[test]
    fn test_infinite_fleet_grows_routes_on_demand() {
        let problem = Arc::new(test_utils::infinite_fleet_problem());
        let mut solution = WorkingSolution::new(Arc::clone(&problem));
        assert_eq!(solution.routes().len(), 1);

        solution.insert(&Insertion::Shipment(ShipmentInsertion {
            route_id: RouteIdx::new(0),
            job_id: JobIdx::new(0),
            pickup_position: 0,
            delivery_position: 0,
        }));

        // A fresh empty route for the same vehicle type appears.
        assert_eq!(solution.routes().len(), 2);
        assert!(solution.routes()[1].is_empty());
        assert_eq!(
            solution.routes()[1].vehicle_id(),
            solution.routes()[0].vehicle_id()
        );
        assert!(
            solution
                .route(RouteIdx::new(0))
                .contains_activity(ActivityId::ShipmentPickup(JobIdx::new(0)))
        );
    }
}
