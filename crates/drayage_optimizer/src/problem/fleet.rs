use crate::problem::vehicle::{Vehicle, VehicleIdx};

/// Fleet-size policy. `Finite` vehicles are used at most once; `Infinite`
/// entries are vehicle types with unlimited copies available.
#[derive(Debug, Clone)]
pub enum Fleet {
    Finite(Vec<Vehicle>),
    Infinite(Vec<Vehicle>),
}

impl Fleet {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Fleet::Infinite(_))
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        match self {
            Fleet::Finite(vehicles) => vehicles,
            Fleet::Infinite(vehicles) => vehicles,
        }
    }

    #[inline]
    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles()[vehicle_id]
    }
}
