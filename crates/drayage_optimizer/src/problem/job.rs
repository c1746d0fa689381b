use std::fmt::Display;

use crate::{
    define_index_newtype,
    problem::{amount::Amount, location::LocationIdx, service::Service, shipment::Shipment},
};

define_index_newtype!(JobIdx, Job);

/// One stop produced by a job: a service visit, or one leg of a shipment.
/// Shipments contribute two activities that must live in the same route
/// with the pickup first.
#[derive(Hash, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ActivityId {
    Service(JobIdx),
    ShipmentPickup(JobIdx),
    ShipmentDelivery(JobIdx),
}

impl ActivityId {
    pub fn job_id(&self) -> JobIdx {
        match self {
            ActivityId::Service(id) => *id,
            ActivityId::ShipmentPickup(id) => *id,
            ActivityId::ShipmentDelivery(id) => *id,
        }
    }

    pub fn is_delivery(&self) -> bool {
        matches!(self, ActivityId::ShipmentDelivery(_))
    }
}

impl Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityId::Service(id) => write!(f, "Service({id})"),
            ActivityId::ShipmentPickup(id) => write!(f, "ShipmentPickup({id})"),
            ActivityId::ShipmentDelivery(id) => write!(f, "ShipmentDelivery({id})"),
        }
    }
}

impl From<ActivityId> for JobIdx {
    fn from(activity_id: ActivityId) -> Self {
        activity_id.job_id()
    }
}

#[derive(Debug, Clone)]
pub enum Job {
    Service(Service),
    Shipment(Shipment),
}

impl Job {
    pub fn external_id(&self) -> &str {
        match self {
            Job::Service(service) => service.external_id(),
            Job::Shipment(shipment) => shipment.external_id(),
        }
    }

    pub fn demand(&self) -> &Amount {
        match self {
            Job::Service(service) => service.demand(),
            Job::Shipment(shipment) => shipment.demand(),
        }
    }

    /// The activities this job contributes to a route, in precedence order.
    pub fn activity_ids(&self, job_id: JobIdx) -> impl Iterator<Item = ActivityId> {
        let (first, second) = match self {
            Job::Service(_) => (ActivityId::Service(job_id), None),
            Job::Shipment(_) => (
                ActivityId::ShipmentPickup(job_id),
                Some(ActivityId::ShipmentDelivery(job_id)),
            ),
        };

        std::iter::once(first).chain(second)
    }

    pub fn location_ids(&self) -> impl Iterator<Item = LocationIdx> + '_ {
        let (first, second) = match self {
            Job::Service(service) => (service.location_id(), None),
            Job::Shipment(shipment) => (
                shipment.pickup_location_id(),
                Some(shipment.delivery_location_id()),
            ),
        };

        std::iter::once(first).chain(second)
    }
}
