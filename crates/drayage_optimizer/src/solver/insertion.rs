use crate::{
    problem::job::{Job, JobIdx},
    solver::solution::{route_id::RouteIdx, working_solution::WorkingSolution},
};

#[derive(Clone, Debug)]
pub struct ServiceInsertion {
    pub route_id: RouteIdx,
    pub job_id: JobIdx,
    pub position: usize,
}

#[derive(Clone, Debug)]
pub struct ShipmentInsertion {
    pub route_id: RouteIdx,
    pub job_id: JobIdx,
    pub pickup_position: usize,
    /// Position before the pickup has been inserted; the delivery lands at
    /// `delivery_position + 1` in the final sequence.
    pub delivery_position: usize,
}

#[derive(Clone, Debug)]
pub enum Insertion {
    Service(ServiceInsertion),
    Shipment(ShipmentInsertion),
}

impl Insertion {
    pub fn job_id(&self) -> JobIdx {
        match self {
            Insertion::Service(context) => context.job_id,
            Insertion::Shipment(context) => context.job_id,
        }
    }

    pub fn route_id(&self) -> RouteIdx {
        match self {
            Insertion::Service(context) => context.route_id,
            Insertion::Shipment(context) => context.route_id,
        }
    }
}

/// Enumerates every candidate placement of the job over every route,
/// routes in index order and positions ascending. Empty routes double as
/// the "new route" candidate for their vehicle.
pub fn for_each_insertion(
    solution: &WorkingSolution,
    job_id: JobIdx,
    mut f: impl FnMut(Insertion),
) {
    for index in 0..solution.routes().len() {
        for_each_route_insertion(solution, RouteIdx::new(index), job_id, &mut f);
    }
}

pub fn for_each_route_insertion(
    solution: &WorkingSolution,
    route_id: RouteIdx,
    job_id: JobIdx,
    mut f: impl FnMut(Insertion),
) {
    let route_len = solution.route(route_id).len();

    match solution.problem().job(job_id) {
        Job::Service(_) => {
            for position in 0..=route_len {
                f(Insertion::Service(ServiceInsertion {
                    route_id,
                    job_id,
                    position,
                }));
            }
        }
        Job::Shipment(_) => {
            for pickup_position in 0..=route_len {
                for delivery_position in pickup_position..=route_len {
                    f(Insertion::Shipment(ShipmentInsertion {
                        route_id,
                        job_id,
                        pickup_position,
                        delivery_position,
                    }));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils;

    #[test]
    fn test_shipment_enumeration_covers_all_pairs() {
        let problem = Arc::new(test_utils::single_vehicle_shipment_problem(4.0));
        let mut solution = WorkingSolution::new(Arc::clone(&problem));

        solution.insert(&Insertion::Shipment(ShipmentInsertion {
            route_id: RouteIdx::new(0),
            job_id: JobIdx::new(0),
            pickup_position: 0,
            delivery_position: 0,
        }));

        let mut pairs = vec![];
        for_each_insertion(&solution, JobIdx::new(1), |insertion| {
            if let Insertion::Shipment(context) = insertion {
                pairs.push((context.pickup_position, context.delivery_position));
            }
        });

        // Route length 2: pickup in 0..=2, delivery from pickup to 2.
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], (0, 0));
        assert_eq!(pairs[5], (2, 2));
        assert!(pairs.iter().all(|&(p, d)| p <= d && d <= 2));
    }

    #[test]
    fn test_empty_route_yields_single_shipment_candidate() {
        let problem = Arc::new(test_utils::single_vehicle_shipment_problem(4.0));
        let solution = WorkingSolution::new(Arc::clone(&problem));

        let mut count = 0;
        for_each_insertion(&solution, JobIdx::new(0), |_| count += 1);

        // One empty route: pickup and delivery both at position 0.
        assert_eq!(count, 1);
    }
}
