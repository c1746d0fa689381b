use fxhash::FxHashMap;

use crate::{
    problem::job::{ActivityId, Job},
    solver::solution::working_solution::WorkingSolution,
};

use super::{ruin_context::RuinContext, ruin_solution::RuinSolution};

/// Removes a randomly anchored cluster of jobs: picks an assigned job and
/// strips it together with its geographically nearest assigned neighbours.
pub struct RuinRadial;

impl RuinSolution for RuinRadial {
    fn ruin_solution<R>(
        &self,
        solution: &mut WorkingSolution,
        RuinContext {
            rng,
            num_jobs_to_remove,
            problem,
        }: RuinContext<R>,
    ) where
        R: rand::RngCore,
    {
        let Some(anchor_job) = solution.random_assigned_job(rng) else {
            return;
        };
        let anchor_activity = match problem.job(anchor_job) {
            Job::Service(_) => ActivityId::Service(anchor_job),
            Job::Shipment(_) => ActivityId::ShipmentPickup(anchor_job),
        };
        let anchor = problem.activity_location_id(anchor_activity);

        // Reduce activities to one distance per job. The spatial index
        // yields equidistant activities in arbitrary order, so ties are
        // broken by job id afterwards for a stable removal order.
        let mut job_distances = FxHashMap::default();
        for (activity_id, distance_2) in problem.nearest_activities(anchor) {
            let entry = job_distances
                .entry(activity_id.job_id())
                .or_insert(distance_2);
            if distance_2 < *entry {
                *entry = distance_2;
            }
        }

        let mut candidates: Vec<_> = job_distances.into_iter().collect();
        candidates.sort_by(|(job_a, dist_a), (job_b, dist_b)| {
            dist_a.total_cmp(dist_b).then(job_a.cmp(job_b))
        });

        // The anchor always goes first, even when a co-located job with a
        // lower id would otherwise win the distance tie.
        let mut remaining = num_jobs_to_remove;
        if remaining > 0 && solution.remove_job(anchor_job) {
            remaining -= 1;
        }
        for (job_id, _) in candidates {
            if remaining == 0 {
                break;
            }
            if job_id != anchor_job && solution.remove_job(job_id) {
                remaining -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::{
        solver::construction::construct_solution,
        test_utils::{self, MockRng},
    };

    #[test]
    fn test_removes_the_anchor_and_its_neighbours() {
        let problem = Arc::new(test_utils::pickup_delivery_scenario());
        let mut solution = construct_solution(Arc::clone(&problem));
        assert_eq!(solution.assigned_count(), 5);

        // MockRng drives random_assigned_job to pick the first assigned job.
        let mut rng = MockRng::new(vec![0]);
        RuinRadial.ruin_solution(
            &mut solution,
            RuinContext {
                problem: &problem,
                rng: &mut rng,
                num_jobs_to_remove: 2,
            },
        );

        assert_eq!(solution.assigned_count(), 3);
        // The anchor itself is always the nearest job, so it must be gone.
        assert!(solution.unassigned_jobs().contains(&crate::problem::job::JobIdx::new(0)));
        assert!(solution.is_consistent());
    }

    #[test]
    fn test_anchor_is_removed_despite_a_co_located_lower_id_job() {
        let problem = Arc::new(test_utils::co_located_pickup_problem());
        let mut solution = construct_solution(Arc::clone(&problem));
        assert_eq!(solution.assigned_count(), 2);

        // u64::MAX maps onto the last assigned index, making job 1 the
        // anchor even though job 0 picks up at the same location.
        let mut rng = MockRng::new(vec![u64::MAX]);
        RuinRadial.ruin_solution(
            &mut solution,
            RuinContext {
                problem: &problem,
                rng: &mut rng,
                num_jobs_to_remove: 1,
            },
        );

        assert_eq!(solution.assigned_count(), 1);
        assert!(solution.unassigned_jobs().contains(&crate::problem::job::JobIdx::new(1)));
        assert!(solution.is_consistent());
    }

    #[test]
    fn test_is_reproducible_for_a_fixed_seed() {
        let problem = Arc::new(test_utils::pickup_delivery_scenario());
        let base = construct_solution(Arc::clone(&problem));

        let ruined: Vec<_> = (0..2)
            .map(|_| {
                let mut solution = base.clone();
                let mut rng = SmallRng::seed_from_u64(11);
                RuinRadial.ruin_solution(
                    &mut solution,
                    RuinContext {
                        problem: &problem,
                        rng: &mut rng,
                        num_jobs_to_remove: 3,
                    },
                );
                solution
            })
            .collect();

        assert!(ruined[0].is_identical(&ruined[1]));
    }

    #[test]
    fn test_empty_solution_is_untouched() {
        let problem = Arc::new(test_utils::pickup_delivery_scenario());
        let mut solution =
            crate::solver::solution::working_solution::WorkingSolution::new(Arc::clone(&problem));

        let mut rng = SmallRng::seed_from_u64(3);
        RuinRadial.ruin_solution(
            &mut solution,
            RuinContext {
                problem: &problem,
                rng: &mut rng,
                num_jobs_to_remove: 2,
            },
        );

        assert_eq!(solution.assigned_count(), 0);
    }
}
