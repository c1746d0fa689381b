use rand::RngCore;

use crate::problem::{
    amount::Amount,
    fleet::Fleet,
    job::Job,
    location::{Location, LocationIdx},
    routing_problem::RoutingProblem,
    service::Service,
    shipment::Shipment,
    vehicle::Vehicle,
};

/// One vehicle at the depot and two unit-demand shipments along the x axis.
pub fn single_vehicle_shipment_problem(capacity: f64) -> RoutingProblem {
    let locations = vec![
        Location::from_cartesian(0.0, 0.0),
        Location::from_cartesian(10.0, 0.0),
        Location::from_cartesian(20.0, 0.0),
        Location::from_cartesian(5.0, 0.0),
        Location::from_cartesian(15.0, 0.0),
    ];
    let jobs = vec![
        Job::Shipment(Shipment::new(
            "shipment-0",
            Amount::single(1.0),
            LocationIdx::new(1),
            LocationIdx::new(2),
        )),
        Job::Shipment(Shipment::new(
            "shipment-1",
            Amount::single(1.0),
            LocationIdx::new(3),
            LocationIdx::new(4),
        )),
    ];
    let fleet = Fleet::Finite(vec![Vehicle::new(
        "vehicle-0",
        LocationIdx::new(0),
        Amount::single(capacity),
        1.0,
    )]);

    RoutingProblem::new(locations, jobs, fleet).unwrap()
}

/// Two unit-demand shipments that share the same pickup location, with
/// deliveries on opposite sides of the depot.
pub fn co_located_pickup_problem() -> RoutingProblem {
    let locations = vec![
        Location::from_cartesian(0.0, 0.0),
        Location::from_cartesian(5.0, 5.0),
        Location::from_cartesian(10.0, 0.0),
        Location::from_cartesian(0.0, 10.0),
    ];
    let jobs = vec![
        Job::Shipment(Shipment::new(
            "shipment-0",
            Amount::single(1.0),
            LocationIdx::new(1),
            LocationIdx::new(2),
        )),
        Job::Shipment(Shipment::new(
            "shipment-1",
            Amount::single(1.0),
            LocationIdx::new(1),
            LocationIdx::new(3),
        )),
    ];
    let fleet = Fleet::Finite(vec![Vehicle::new(
        "vehicle-0",
        LocationIdx::new(0),
        Amount::single(2.0),
        1.0,
    )]);

    RoutingProblem::new(locations, jobs, fleet).unwrap()
}

/// A depot, a single service 10 units away and a vehicle that costs 2 per
/// unit of distance plus the given fixed cost when it leaves the depot.
pub fn service_problem_with_fixed_cost(fixed_cost: f64) -> RoutingProblem {
    let locations = vec![
        Location::from_cartesian(0.0, 0.0),
        Location::from_cartesian(10.0, 0.0),
    ];
    let jobs = vec![Job::Service(Service::new(
        "service-0",
        LocationIdx::new(1),
        Amount::single(1.0),
    ))];
    let fleet = Fleet::Finite(vec![
        Vehicle::new(
            "vehicle-0",
            LocationIdx::new(0),
            Amount::single(2.0),
            2.0,
        )
        .with_fixed_cost(fixed_cost),
    ]);

    RoutingProblem::new(locations, jobs, fleet).unwrap()
}

/// One vehicle type with unlimited copies and two unit shipments.
pub fn infinite_fleet_problem() -> RoutingProblem {
    let locations = vec![
        Location::from_cartesian(0.0, 0.0),
        Location::from_cartesian(1.0, 0.0),
        Location::from_cartesian(2.0, 0.0),
    ];
    let jobs = vec![
        Job::Shipment(Shipment::new(
            "shipment-0",
            Amount::single(1.0),
            LocationIdx::new(1),
            LocationIdx::new(2),
        )),
        Job::Shipment(Shipment::new(
            "shipment-1",
            Amount::single(1.0),
            LocationIdx::new(2),
            LocationIdx::new(1),
        )),
    ];
    let fleet = Fleet::Infinite(vec![Vehicle::new(
        "van",
        LocationIdx::new(0),
        Amount::single(1.0),
        1.0,
    )]);

    RoutingProblem::new(locations, jobs, fleet).unwrap()
}

/// A vehicle of capacity one, one shipment that fits and one that never
/// can.
pub fn problem_with_oversized_shipment() -> RoutingProblem {
    let locations = vec![
        Location::from_cartesian(0.0, 0.0),
        Location::from_cartesian(3.0, 0.0),
        Location::from_cartesian(6.0, 0.0),
    ];
    let jobs = vec![
        Job::Shipment(Shipment::new(
            "fits",
            Amount::single(1.0),
            LocationIdx::new(1),
            LocationIdx::new(2),
        )),
        Job::Shipment(Shipment::new(
            "oversized",
            Amount::single(5.0),
            LocationIdx::new(2),
            LocationIdx::new(1),
        )),
    ];
    let fleet = Fleet::Finite(vec![Vehicle::new(
        "vehicle-0",
        LocationIdx::new(0),
        Amount::single(1.0),
        1.0,
    )]);

    RoutingProblem::new(locations, jobs, fleet).unwrap()
}

/// Five unit shipments and one vehicle of capacity four starting at
/// (10, 50). All five fit on a single tour.
pub fn pickup_delivery_scenario() -> RoutingProblem {
    let locations = vec![
        Location::from_cartesian(10.0, 50.0),
        Location::from_cartesian(50.0, 10.0),
        Location::from_cartesian(100.0, 50.0),
        Location::from_cartesian(100.0, 10.0),
        Location::from_cartesian(10.0, 10.0),
    ];
    let shipments = [
        ("shipment-1", 0, 1),
        ("shipment-2", 2, 1),
        ("shipment-3", 1, 3),
        ("shipment-4", 1, 4),
        ("shipment-5", 4, 2),
    ];
    let jobs: Vec<Job> = shipments
        .into_iter()
        .map(|(external_id, pickup, delivery)| {
            Job::Shipment(Shipment::new(
                external_id,
                Amount::single(1.0),
                LocationIdx::new(pickup),
                LocationIdx::new(delivery),
            ))
        })
        .collect();
    let fleet = Fleet::Finite(vec![Vehicle::new(
        "vehicle-0",
        LocationIdx::new(0),
        Amount::single(4.0),
        1.0,
    )]);

    RoutingProblem::new(locations, jobs, fleet).unwrap()
}

/// Replays a fixed sequence of values, cycling once exhausted.
pub struct MockRng {
    data: Vec<u64>,
    index: usize,
}

impl MockRng {
    pub fn new(data: Vec<u64>) -> Self {
        MockRng { data, index: 0 }
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.data[self.index % self.data.len()];
        self.index = (self.index + 1) % self.data.len();
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst.iter_mut() {
            *byte = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_rng_cycles_its_data() {
        let data = vec![1, 2, 3];
        let mut rng = MockRng::new(data.clone());

        for &expected in data.iter().cycle().take(6) {
            assert_eq!(rng.next_u64(), expected);
        }
    }

    #[test]
    fn test_fixtures_validate() {
        assert_eq!(single_vehicle_shipment_problem(4.0).jobs().len(), 2);
        assert_eq!(service_problem_with_fixed_cost(1.0).jobs().len(), 1);
        assert_eq!(infinite_fleet_problem().vehicles().len(), 1);
        assert_eq!(problem_with_oversized_shipment().jobs().len(), 2);
        assert_eq!(pickup_delivery_scenario().jobs().len(), 5);
    }
}
