use serde::Serialize;

use crate::problem::{amount::Amount, location::LocationIdx};

/// A linked pickup/delivery pair served by one vehicle, pickup strictly
/// before delivery. Identical pickup and delivery locations are allowed
/// and cost a zero-distance leg.
#[derive(Serialize, Debug, Clone)]
pub struct Shipment {
    external_id: String,
    demand: Amount,
    pickup_location_id: LocationIdx,
    delivery_location_id: LocationIdx,
}

impl Shipment {
    pub fn new(
        external_id: impl Into<String>,
        demand: Amount,
        pickup_location_id: LocationIdx,
        delivery_location_id: LocationIdx,
    ) -> Self {
        Shipment {
            external_id: external_id.into(),
            demand,
            pickup_location_id,
            delivery_location_id,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn demand(&self) -> &Amount {
        &self.demand
    }

    pub fn pickup_location_id(&self) -> LocationIdx {
        self.pickup_location_id
    }

    pub fn delivery_location_id(&self) -> LocationIdx {
        self.delivery_location_id
    }
}
