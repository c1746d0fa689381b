use serde::Serialize;

use crate::{
    define_index_newtype,
    problem::{amount::Amount, location::LocationIdx},
};

define_index_newtype!(VehicleIdx, Vehicle);

/// A vehicle (or vehicle type, under an infinite fleet). Routes start at
/// `start_location_id` and end at `end_location_id`, which defaults to the
/// start when not given.
#[derive(Serialize, Debug, Clone)]
pub struct Vehicle {
    external_id: String,
    start_location_id: LocationIdx,
    end_location_id: Option<LocationIdx>,
    capacity: Amount,
    cost_per_distance: f64,
    fixed_cost: f64,
}

impl Vehicle {
    pub fn new(
        external_id: impl Into<String>,
        start_location_id: LocationIdx,
        capacity: Amount,
        cost_per_distance: f64,
    ) -> Self {
        Vehicle {
            external_id: external_id.into(),
            start_location_id,
            end_location_id: None,
            capacity,
            cost_per_distance,
            fixed_cost: 0.0,
        }
    }

    pub fn with_end_location(mut self, end_location_id: LocationIdx) -> Self {
        self.end_location_id = Some(end_location_id);
        self
    }

    pub fn with_fixed_cost(mut self, fixed_cost: f64) -> Self {
        self.fixed_cost = fixed_cost;
        self
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn start_location_id(&self) -> LocationIdx {
        self.start_location_id
    }

    pub fn end_location_id(&self) -> LocationIdx {
        self.end_location_id.unwrap_or(self.start_location_id)
    }

    pub fn capacity(&self) -> &Amount {
        &self.capacity
    }

    pub fn cost_per_distance(&self) -> f64 {
        self.cost_per_distance
    }

    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }
}
