pub mod activity_location_index;
pub mod amount;
pub mod error;
pub mod fleet;
pub mod job;
pub mod location;
pub mod routing_problem;
pub mod service;
pub mod shipment;
pub mod vehicle;
