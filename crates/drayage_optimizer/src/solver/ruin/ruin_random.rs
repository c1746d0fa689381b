use crate::solver::solution::working_solution::WorkingSolution;

use super::{ruin_context::RuinContext, ruin_solution::RuinSolution};

/// Removes a uniform sample of distinct assigned jobs.
pub struct RuinRandom;

impl RuinSolution for RuinRandom {
    fn ruin_solution<R>(
        &self,
        solution: &mut WorkingSolution,
        RuinContext {
            rng,
            num_jobs_to_remove,
            ..
        }: RuinContext<R>,
    ) where
        R: rand::RngCore,
    {
        let assigned = solution.assigned_jobs();
        if assigned.is_empty() {
            return;
        }

        let amount = num_jobs_to_remove.min(assigned.len());
        for index in rand::seq::index::sample(rng, assigned.len(), amount) {
            solution.remove_job(assigned[index]);
        }
    }
}
