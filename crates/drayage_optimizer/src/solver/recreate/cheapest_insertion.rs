use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    problem::routing_problem::Cost,
    solver::{
        insertion::{Insertion, for_each_insertion},
        solution::working_solution::WorkingSolution,
    },
};

use super::{recreate_context::RecreateContext, recreate_solution::RecreateSolution};

/// Greedy cheapest insertion: each round evaluates every feasible placement
/// of every unassigned job and commits the globally cheapest one. Rounds
/// repeat until no unassigned job can be placed. A no-op when everything is
/// already assigned.
pub struct CheapestInsertion;

impl CheapestInsertion {
    fn best_global_insertion(
        &self,
        solution: &WorkingSolution,
        context: &RecreateContext,
    ) -> Option<(Cost, Insertion)> {
        solution
            .unassigned_jobs_sorted()
            .into_par_iter()
            .filter_map(|job_id| {
                let mut best: Option<(Cost, Insertion)> = None;
                for_each_insertion(solution, job_id, |insertion| {
                    let Some(cost) = context.evaluate_insertion(solution, &insertion) else {
                        return;
                    };
                    if best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
                        best = Some((cost, insertion));
                    }
                });
                best
            })
            // Distinct job ids make the (cost, job) order total, so the
            // winner does not depend on rayon's split points.
            .min_by(|(cost_a, insertion_a), (cost_b, insertion_b)| {
                cost_a
                    .total_cmp(cost_b)
                    .then(insertion_a.job_id().cmp(&insertion_b.job_id()))
            })
    }
}

impl RecreateSolution for CheapestInsertion {
    fn recreate_solution(&self, solution: &mut WorkingSolution, context: &RecreateContext) {
        while let Some((_, insertion)) = self.best_global_insertion(solution, context) {
            solution.insert(&insertion);
        }
    }
}
