use thiserror::Error;

/// Invalid-problem errors, raised by `RoutingProblem::new` before any
/// search starts. All other conditions (infeasible placement, budget
/// exhaustion, cancellation) are absorbed into the cost model and do not
/// surface as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("fleet contains no vehicles")]
    EmptyFleet,

    #[error("location {location} has a non-finite coordinate")]
    NonFiniteCoordinate { location: usize },

    #[error("vehicle '{vehicle}' has a non-positive capacity dimension")]
    NonPositiveVehicleCapacity { vehicle: String },

    #[error("job '{job}' has a zero or negative capacity demand")]
    NonPositiveDemand { job: String },

    #[error("vehicle '{vehicle}' references location {location} outside the location table")]
    VehicleLocationOutOfBounds { vehicle: String, location: usize },

    #[error("job '{job}' references location {location} outside the location table")]
    JobLocationOutOfBounds { job: String, location: usize },
}
