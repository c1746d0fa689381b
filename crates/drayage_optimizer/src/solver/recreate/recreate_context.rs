use crate::{
    problem::routing_problem::{Cost, RoutingProblem},
    solver::{
        constraints::constraint::{Constraint, satisfies_all},
        insertion::Insertion,
        insertion_cost::insertion_delta_cost,
        solution::working_solution::WorkingSolution,
    },
};

pub struct RecreateContext<'a> {
    pub problem: &'a RoutingProblem,
    pub constraints: &'a [Constraint],
}

impl RecreateContext<'_> {
    /// Marginal cost of the insertion, or `None` when a constraint rejects it.
    pub fn evaluate_insertion(
        &self,
        solution: &WorkingSolution,
        insertion: &Insertion,
    ) -> Option<Cost> {
        if !satisfies_all(self.constraints, self.problem, solution, insertion) {
            return None;
        }

        Some(insertion_delta_cost(solution, insertion))
    }
}
