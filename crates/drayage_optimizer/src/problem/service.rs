use serde::Serialize;

use crate::problem::{amount::Amount, location::LocationIdx};

/// A single-activity job. Its demand occupies vehicle capacity from the
/// activity to the end of the route.
#[derive(Serialize, Debug, Clone)]
pub struct Service {
    external_id: String,
    location_id: LocationIdx,
    demand: Amount,
}

impl Service {
    pub fn new(external_id: impl Into<String>, location_id: LocationIdx, demand: Amount) -> Self {
        Service {
            external_id: external_id.into(),
            location_id,
            demand,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn location_id(&self) -> LocationIdx {
        self.location_id
    }

    pub fn demand(&self) -> &Amount {
        &self.demand
    }
}
