use std::time::Duration;

use crate::solver::{
    recreate::recreate_strategy::RecreateStrategy, ruin::ruin_strategy::RuinStrategy,
};

#[derive(Clone, Debug)]
pub struct SolverParams {
    pub terminations: Vec<Termination>,
    pub acceptor: AcceptorStrategy,

    /// Alternated per iteration, round robin.
    pub ruin_strategies: Vec<RuinStrategy>,
    pub recreate_strategy: RecreateStrategy,

    /// Ruin removes a per-iteration random share of the assigned jobs,
    /// drawn uniformly from `[ruin_minimum_ratio, ruin_maximum_ratio]`.
    /// At least one job is always removed.
    pub ruin_minimum_ratio: f64,
    pub ruin_maximum_ratio: f64,

    /// Independent search trajectories run on their own threads; they
    /// share only the problem and the best-solution pool.
    pub num_trajectories: usize,

    /// Solutions retained in the shared pool, best first.
    pub max_solutions: usize,

    /// Ruin/recreate probes used to calibrate the annealing temperature
    /// before the counted iterations start.
    pub warmup_iterations: usize,

    pub seed: u64,
}

#[derive(Clone, Debug)]
pub enum Termination {
    Duration(Duration),
    Iterations(usize),
    IterationsWithoutImprovement(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcceptorStrategy {
    Greedy,
    Annealing,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            terminations: Vec::new(),
            acceptor: AcceptorStrategy::Annealing,
            ruin_strategies: vec![RuinStrategy::Random, RuinStrategy::Radial],
            recreate_strategy: RecreateStrategy::CheapestInsertion,
            ruin_minimum_ratio: 0.1,
            ruin_maximum_ratio: 0.3,
            num_trajectories: 1,
            max_solutions: 10,
            warmup_iterations: 20,
            seed: 7919,
        }
    }
}

impl SolverParams {
    /// Iteration budget: the smallest explicit `Iterations` termination,
    /// or a default proportional to the problem size.
    pub fn max_iterations(&self, num_jobs: usize) -> usize {
        self.terminations
            .iter()
            .filter_map(|termination| match termination {
                Termination::Iterations(iterations) => Some(*iterations),
                _ => None,
            })
            .min()
            .unwrap_or_else(|| (num_jobs * 100).max(100))
    }

    /// Number of jobs ruin removes this iteration, given the current
    /// assigned count and a uniform draw in the configured ratio range.
    pub fn num_jobs_to_remove(&self, assigned_count: usize, ratio_draw: f64) -> usize {
        let ratio = self.ruin_minimum_ratio
            + (self.ruin_maximum_ratio - self.ruin_minimum_ratio) * ratio_draw;
        ((assigned_count as f64 * ratio).floor() as usize)
            .max(1)
            .min(assigned_count)
    }
}
