use rand::RngCore;

use crate::problem::routing_problem::RoutingProblem;

pub struct RuinContext<'a, R>
where
    R: RngCore,
{
    pub problem: &'a RoutingProblem,
    pub rng: &'a mut R,
    pub num_jobs_to_remove: usize,
}
