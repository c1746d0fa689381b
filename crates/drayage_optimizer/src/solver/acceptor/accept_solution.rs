use rand::RngCore;

use crate::problem::routing_problem::Cost;

pub struct AcceptSolutionContext<'a, R>
where
    R: RngCore,
{
    pub iteration: usize,
    pub max_iterations: usize,
    pub rng: &'a mut R,
}

/// Decides, once per iteration, whether the candidate replaces the current
/// solution of a trajectory. The best-ever solution is tracked elsewhere
/// and is unaffected by rejection.
pub trait AcceptSolution {
    fn accept<R>(
        &self,
        current_cost: Cost,
        candidate_cost: Cost,
        context: AcceptSolutionContext<R>,
    ) -> bool
    where
        R: RngCore;
}
