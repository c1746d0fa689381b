use rand::RngCore;

use crate::problem::routing_problem::Cost;

use super::accept_solution::{AcceptSolution, AcceptSolutionContext};

/// Accepts a candidate only when it is at least as good as the current
/// solution. Pure hill climbing.
pub struct GreedyAcceptor;

impl AcceptSolution for GreedyAcceptor {
    fn accept<R>(
        &self,
        current_cost: Cost,
        candidate_cost: Cost,
        _: AcceptSolutionContext<R>,
    ) -> bool
    where
        R: RngCore,
    {
        candidate_cost <= current_cost
    }
}
