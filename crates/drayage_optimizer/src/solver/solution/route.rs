use fxhash::FxHashMap;

use crate::problem::{
    amount::Amount,
    job::{ActivityId, JobIdx},
    routing_problem::{Cost, RoutingProblem},
    vehicle::VehicleIdx,
};

/// One vehicle's ordered activity sequence, backed by index-stable vectors.
/// `loads[i]` is the running load after serving activity `i`; capacity
/// feasibility is a prefix property over that vector.
#[derive(Clone)]
pub struct Route {
    vehicle_id: VehicleIdx,
    activity_ids: Vec<ActivityId>,
    positions: FxHashMap<ActivityId, usize>,
    loads: Vec<Amount>,
}

impl Route {
    pub fn empty(vehicle_id: VehicleIdx) -> Self {
        Route {
            vehicle_id,
            activity_ids: Vec::new(),
            positions: FxHashMap::default(),
            loads: Vec::new(),
        }
    }

    pub fn vehicle_id(&self) -> VehicleIdx {
        self.vehicle_id
    }

    pub fn len(&self) -> usize {
        self.activity_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activity_ids.is_empty()
    }

    pub fn activity_ids(&self) -> &[ActivityId] {
        &self.activity_ids
    }

    pub fn activity(&self, position: usize) -> ActivityId {
        self.activity_ids[position]
    }

    pub fn contains_activity(&self, activity_id: ActivityId) -> bool {
        self.positions.contains_key(&activity_id)
    }

    pub fn position_of(&self, activity_id: ActivityId) -> Option<usize> {
        self.positions.get(&activity_id).copied()
    }

    /// Running load after serving the activity at `position`.
    pub fn load_at(&self, position: usize) -> &Amount {
        &self.loads[position]
    }

    /// Whether the service can be spliced in at `position` without breaking
    /// capacity at any prefix. A service occupies capacity from its
    /// activity to the end of the route.
    pub fn can_insert_service(
        &self,
        problem: &RoutingProblem,
        job_id: JobIdx,
        position: usize,
    ) -> bool {
        if position > self.len() {
            return false;
        }

        let capacity = problem.vehicle(self.vehicle_id).capacity();
        let demand = problem.job(job_id).demand();

        if !demand.fits_within(capacity) {
            return false;
        }

        if position > 0
            && !self.loads[position - 1].fits_within_after_adding(demand, capacity)
        {
            return false;
        }

        self.loads[position..]
            .iter()
            .all(|load| load.fits_within_after_adding(demand, capacity))
    }

    /// Whether the shipment can be spliced in with its pickup at
    /// `pickup_position` and its delivery after the activity currently at
    /// `delivery_position - 1`. Both positions refer to the route before
    /// insertion, `pickup_position <= delivery_position`; the demand is
    /// carried over exactly the activities in between.
    pub fn can_insert_shipment(
        &self,
        problem: &RoutingProblem,
        job_id: JobIdx,
        pickup_position: usize,
        delivery_position: usize,
    ) -> bool {
        if pickup_position > delivery_position || delivery_position > self.len() {
            return false;
        }

        let capacity = problem.vehicle(self.vehicle_id).capacity();
        let demand = problem.job(job_id).demand();

        if !demand.fits_within(capacity) {
            return false;
        }

        if pickup_position > 0
            && !self.loads[pickup_position - 1].fits_within_after_adding(demand, capacity)
        {
            return false;
        }

        self.loads[pickup_position..delivery_position]
            .iter()
            .all(|load| load.fits_within_after_adding(demand, capacity))
    }

    pub fn insert_service(&mut self, problem: &RoutingProblem, job_id: JobIdx, position: usize) {
        self.activity_ids
            .insert(position, ActivityId::Service(job_id));
        self.resync(problem);
    }

    /// Inserts the delivery first so the pickup position is unaffected; the
    /// delivery ends up at `delivery_position + 1` in the new sequence,
    /// which keeps pickup strictly before delivery.
    pub fn insert_shipment(
        &mut self,
        problem: &RoutingProblem,
        job_id: JobIdx,
        pickup_position: usize,
        delivery_position: usize,
    ) {
        debug_assert!(pickup_position <= delivery_position);
        debug_assert!(delivery_position <= self.len());

        self.activity_ids
            .insert(delivery_position, ActivityId::ShipmentDelivery(job_id));
        self.activity_ids
            .insert(pickup_position, ActivityId::ShipmentPickup(job_id));
        self.resync(problem);
    }

    /// Removes every activity of the job (both legs of a shipment),
    /// renumbering the remainder contiguously.
    pub fn remove_job(&mut self, problem: &RoutingProblem, job_id: JobIdx) -> bool {
        let before = self.activity_ids.len();
        self.activity_ids
            .retain(|activity_id| activity_id.job_id() != job_id);

        if self.activity_ids.len() == before {
            return false;
        }

        self.resync(problem);
        true
    }

    /// Rebuilds the position map and running loads from the activity
    /// sequence.
    pub fn resync(&mut self, problem: &RoutingProblem) {
        self.positions.clear();
        self.loads.clear();

        let mut load = Amount::empty();
        for (position, &activity_id) in self.activity_ids.iter().enumerate() {
            self.positions.insert(activity_id, position);

            let demand = problem.job(activity_id.job_id()).demand();
            if activity_id.is_delivery() {
                load -= demand;
            } else {
                load += demand;
            }

            self.loads.push(load.clone());
        }
    }

    pub fn distance(&self, problem: &RoutingProblem) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let vehicle = problem.vehicle(self.vehicle_id);
        let mut distance = 0.0;
        let mut from = vehicle.start_location_id();

        for &activity_id in &self.activity_ids {
            let to = problem.activity_location_id(activity_id);
            distance += problem.distance(from, to);
            from = to;
        }

        distance + problem.distance(from, vehicle.end_location_id())
    }

    /// Distance-proportional cost plus the vehicle fixed cost when the
    /// route serves anything.
    pub fn cost(&self, problem: &RoutingProblem) -> Cost {
        if self.is_empty() {
            return 0.0;
        }

        let vehicle = problem.vehicle(self.vehicle_id);
        self.distance(problem) * vehicle.cost_per_distance() + vehicle.fixed_cost()
    }

    /// Capacity never exceeded at any prefix, componentwise.
    pub fn is_capacity_feasible(&self, problem: &RoutingProblem) -> bool {
        let capacity = problem.vehicle(self.vehicle_id).capacity();
        self.loads.iter().all(|load| load.fits_within(capacity))
    }

    /// Every shipment leg present has its counterpart in this route with
    /// pickup strictly before delivery.
    pub fn is_precedence_feasible(&self) -> bool {
        self.activity_ids.iter().all(|activity_id| {
            let job_id = activity_id.job_id();
            match activity_id {
                ActivityId::Service(_) => true,
                ActivityId::ShipmentPickup(_) => self
                    .position_of(ActivityId::ShipmentDelivery(job_id))
                    .is_some_and(|delivery| {
                        self.position_of(ActivityId::ShipmentPickup(job_id))
                            .is_some_and(|pickup| pickup < delivery)
                    }),
                ActivityId::ShipmentDelivery(_) => {
                    self.contains_activity(ActivityId::ShipmentPickup(job_id))
                }
            }
        })
    }
}
