use serde::Serialize;

use crate::{
    problem::routing_problem::RoutingProblem,
    solver::{
        constraints::capacity_constraint::CapacityConstraint, insertion::Insertion,
        solution::working_solution::WorkingSolution,
    },
};

/// The feasibility checks applied to every candidate insertion. Closed set;
/// new route-level rules (time windows, skills) plug in as further variants.
#[derive(Clone, Copy, Debug)]
pub enum Constraint {
    Capacity(CapacityConstraint),
}

impl Constraint {
    pub fn can_insert(
        &self,
        problem: &RoutingProblem,
        solution: &WorkingSolution,
        insertion: &Insertion,
    ) -> bool {
        match self {
            Constraint::Capacity(constraint) => constraint.can_insert(problem, solution, insertion),
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Capacity(_) => write!(f, "capacity"),
        }
    }
}

impl Serialize for Constraint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The default rule set applied by construction and recreate.
pub fn default_constraints() -> Vec<Constraint> {
    vec![Constraint::Capacity(CapacityConstraint)]
}

/// An insertion is admissible when every constraint accepts it.
pub fn satisfies_all(
    constraints: &[Constraint],
    problem: &RoutingProblem,
    solution: &WorkingSolution,
    insertion: &Insertion,
) -> bool {
    constraints
        .iter()
        .all(|constraint| constraint.can_insert(problem, solution, insertion))
}
