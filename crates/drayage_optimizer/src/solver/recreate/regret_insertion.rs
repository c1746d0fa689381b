use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    problem::routing_problem::Cost,
    solver::{
        insertion::{Insertion, for_each_insertion},
        solution::working_solution::WorkingSolution,
    },
};

use super::{recreate_context::RecreateContext, recreate_solution::RecreateSolution};

/// Regret-k insertion: each round inserts the job that would lose the most
/// by not being placed now, measured as the cost gap between its best
/// placement and its k-1 runner-ups. Jobs with fewer than k feasible
/// placements are maximally urgent and go first.
pub struct RegretInsertion {
    k: usize,
}

impl RegretInsertion {
    /// Panics if `k < 2`; the regret of a single option is always zero.
    pub fn new(k: usize) -> Self {
        assert!(k >= 2, "regret-k needs at least two options to compare");
        RegretInsertion { k }
    }

    fn most_regretted_insertion(
        &self,
        solution: &WorkingSolution,
        context: &RecreateContext,
    ) -> Option<Insertion> {
        solution
            .unassigned_jobs_sorted()
            .into_par_iter()
            .filter_map(|job_id| {
                let mut costs: Vec<(Cost, Insertion)> = Vec::new();
                for_each_insertion(solution, job_id, |insertion| {
                    if let Some(cost) = context.evaluate_insertion(solution, &insertion) {
                        costs.push((cost, insertion));
                    }
                });
                if costs.is_empty() {
                    return None;
                }

                costs.sort_by(|(cost_a, _), (cost_b, _)| cost_a.total_cmp(cost_b));

                let regret = if costs.len() < self.k {
                    f64::INFINITY
                } else {
                    let best_cost = costs[0].0;
                    costs[1..self.k]
                        .iter()
                        .map(|(cost, _)| cost - best_cost)
                        .sum()
                };

                let (_, best_insertion) = costs.swap_remove(0);
                Some((regret, job_id, best_insertion))
            })
            .max_by(|(regret_a, job_a, _), (regret_b, job_b, _)| {
                // Highest regret wins; equal regrets resolve to the lowest
                // job id so the round order is reproducible.
                regret_a.total_cmp(regret_b).then(job_b.cmp(job_a))
            })
            .map(|(_, _, insertion)| insertion)
    }
}

impl RecreateSolution for RegretInsertion {
    fn recreate_solution(&self, solution: &mut WorkingSolution, context: &RecreateContext) {
        while let Some(insertion) = self.most_regretted_insertion(solution, context) {
            solution.insert(&insertion);
        }
    }
}
