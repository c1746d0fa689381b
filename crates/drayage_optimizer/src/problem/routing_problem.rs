use crate::problem::{
    activity_location_index::ActivityLocationIndex,
    error::ProblemError,
    fleet::Fleet,
    job::{ActivityId, Job, JobIdx},
    location::{Location, LocationIdx},
    vehicle::{Vehicle, VehicleIdx},
};

pub type Cost = f64;

/// Immutable problem description: the sole input to the solver. Built once
/// through the validating factory and read-only afterwards; it owns no
/// search state and is shared across trajectories without synchronization.
pub struct RoutingProblem {
    locations: Vec<Location>,
    jobs: Vec<Job>,
    fleet: Fleet,
    activity_location_index: ActivityLocationIndex,
    unassigned_penalty: Cost,
}

impl RoutingProblem {
    pub fn new(
        locations: Vec<Location>,
        jobs: Vec<Job>,
        fleet: Fleet,
    ) -> Result<Self, ProblemError> {
        Self::validate(&locations, &jobs, &fleet)?;

        let activity_location_index = ActivityLocationIndex::new(&locations, &jobs);
        let unassigned_penalty = Self::derive_unassigned_penalty(&locations, &fleet);

        Ok(RoutingProblem {
            locations,
            jobs,
            fleet,
            activity_location_index,
            unassigned_penalty,
        })
    }

    /// Replaces the derived penalty with a caller-supplied value, for
    /// callers that know the business cost of dropping a job upfront.
    pub fn with_unassigned_penalty(mut self, penalty: Cost) -> Self {
        self.unassigned_penalty = penalty;
        self
    }

    fn validate(
        locations: &[Location],
        jobs: &[Job],
        fleet: &Fleet,
    ) -> Result<(), ProblemError> {
        if fleet.vehicles().is_empty() {
            return Err(ProblemError::EmptyFleet);
        }

        for (index, location) in locations.iter().enumerate() {
            if !location.is_finite() {
                return Err(ProblemError::NonFiniteCoordinate { location: index });
            }
        }

        for vehicle in fleet.vehicles() {
            if !vehicle.capacity().is_strictly_positive() {
                return Err(ProblemError::NonPositiveVehicleCapacity {
                    vehicle: vehicle.external_id().to_owned(),
                });
            }

            for location_id in [vehicle.start_location_id(), vehicle.end_location_id()] {
                if location_id.get() >= locations.len() {
                    return Err(ProblemError::VehicleLocationOutOfBounds {
                        vehicle: vehicle.external_id().to_owned(),
                        location: location_id.get(),
                    });
                }
            }
        }

        for job in jobs {
            if !job.demand().is_strictly_positive() {
                return Err(ProblemError::NonPositiveDemand {
                    job: job.external_id().to_owned(),
                });
            }

            for location_id in job.location_ids() {
                if location_id.get() >= locations.len() {
                    return Err(ProblemError::JobLocationOutOfBounds {
                        job: job.external_id().to_owned(),
                        location: location_id.get(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Penalty charged per unassigned job. Must exceed any single insertion
    /// delta so that serving a job is always cheaper than leaving it out:
    /// an insertion detour is bounded by two maximum-length legs plus one
    /// vehicle fixed cost.
    fn derive_unassigned_penalty(locations: &[Location], fleet: &Fleet) -> Cost {
        let max_distance = locations
            .iter()
            .enumerate()
            .flat_map(|(i, a)| locations[i + 1..].iter().map(move |b| a.euclidean_distance(b)))
            .fold(0.0_f64, f64::max);

        let (max_cost_per_distance, max_fixed_cost) = fleet.vehicles().iter().fold(
            (0.0_f64, 0.0_f64),
            |(cost_per_distance, fixed), vehicle| {
                (
                    cost_per_distance.max(vehicle.cost_per_distance()),
                    fixed.max(vehicle.fixed_cost()),
                )
            },
        );

        2.0 * max_distance * max_cost_per_distance + max_fixed_cost + 1.0
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, job_id: JobIdx) -> &Job {
        &self.jobs[job_id]
    }

    pub fn job_ids(&self) -> impl Iterator<Item = JobIdx> {
        (0..self.jobs.len()).map(JobIdx::new)
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.fleet.vehicles()
    }

    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        self.fleet.vehicle(vehicle_id)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, location_id: LocationIdx) -> &Location {
        &self.locations[location_id]
    }

    pub fn activity_location_id(&self, activity_id: ActivityId) -> LocationIdx {
        match (activity_id, self.job(activity_id.job_id())) {
            (ActivityId::Service(_), Job::Service(service)) => service.location_id(),
            (ActivityId::ShipmentPickup(_), Job::Shipment(shipment)) => {
                shipment.pickup_location_id()
            }
            (ActivityId::ShipmentDelivery(_), Job::Shipment(shipment)) => {
                shipment.delivery_location_id()
            }
            _ => unreachable!("activity {activity_id} does not match its job kind"),
        }
    }

    pub fn distance(&self, from: LocationIdx, to: LocationIdx) -> f64 {
        self.locations[from].euclidean_distance(&self.locations[to])
    }

    pub fn unassigned_penalty(&self) -> Cost {
        self.unassigned_penalty
    }

    pub fn nearest_activities(
        &self,
        location_id: LocationIdx,
    ) -> impl Iterator<Item = (ActivityId, f64)> + '_ {
        self.activity_location_index
            .nearest_iter(&self.locations[location_id])
    }
}
